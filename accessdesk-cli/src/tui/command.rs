//! Side effects returned from `update`.

use std::future::Future;
use std::pin::Pin;

/// Screens the portal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    AccessRequest,
    GroupCreate,
    Stores,
    Roles,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Self::Home,
        Self::AccessRequest,
        Self::GroupCreate,
        Self::Stores,
        Self::Roles,
        Self::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AccessRequest => "Access Request",
            Self::GroupCreate => "Create Group",
            Self::Stores => "Stores",
            Self::Roles => "Roles",
            Self::Profile => "Profile",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "access-request" | "access" => Some(Self::AccessRequest),
            "create-group" | "group-create" => Some(Self::GroupCreate),
            "stores" => Some(Self::Stores),
            "roles" => Some(Self::Roles),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }
}

type BoxedMsgFuture<Msg> = Pin<Box<dyn Future<Output = Msg> + Send>>;

/// What an update asks the runtime to do next.
pub enum Command<Msg> {
    None,
    Quit,
    Navigate(Screen),
    /// Run a future on the tokio runtime; its output is dispatched back
    /// to the app as a message.
    Perform(BoxedMsgFuture<Msg>),
}

impl<Msg: Send + 'static> Command<Msg> {
    pub fn perform(future: impl Future<Output = Msg> + Send + 'static) -> Self {
        Self::Perform(Box::pin(future))
    }

    /// Lift an app-level command into the portal-level message type.
    pub fn map<Out: Send + 'static>(
        self,
        wrap: impl Fn(Msg) -> Out + Send + 'static,
    ) -> Command<Out> {
        match self {
            Self::None => Command::None,
            Self::Quit => Command::Quit,
            Self::Navigate(screen) => Command::Navigate(screen),
            Self::Perform(future) => Command::Perform(Box::pin(async move {
                let msg = future.await;
                wrap(msg)
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_from_name() {
        assert_eq!(Screen::from_name("home"), Some(Screen::Home));
        assert_eq!(Screen::from_name("Access-Request"), Some(Screen::AccessRequest));
        assert_eq!(Screen::from_name("nope"), None);
    }

    #[tokio::test]
    async fn test_map_wraps_performed_output() {
        let command = Command::perform(async { 41usize }).map(|n| n + 1);
        match command {
            Command::Perform(future) => assert_eq!(future.await, 42),
            _ => panic!("expected Perform"),
        }
    }
}
