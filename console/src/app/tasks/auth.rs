//! # Login Task

use super::TaskContext;
use crate::app::events::AppEvent;

pub(crate) fn login(ctx: &TaskContext, username: String, password: String) {
    ctx.spawn("login", move |api| async move {
        let outcome = api.login(username.clone(), password).await;
        AppEvent::LoginResult { username, outcome }
    });
}
