//! Mock collaborators for isolating the search controller in tests.

use mockall::mock;

use crate::domain::notification::Notification;
use crate::services::search::{Notifier, RequestDispatcher, ResponseTarget};

mock! {
    pub Dispatcher {}

    impl RequestDispatcher for Dispatcher {
        fn dispatch(&self, target: ResponseTarget, url: &str);
    }
}

mock! {
    pub Notifications {}

    impl Notifier for Notifications {
        fn notify(&self, notification: Notification);
    }
}
