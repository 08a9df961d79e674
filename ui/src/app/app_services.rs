use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::ErrorNotice;
use crate::console_error;
use crate::services::auth::{AuthClient, FirebaseAuthClient};
use crate::services::config::{get_global_config, AppConfig};
use crate::services::feed::{FeedClient, FirestoreFeedClient};

/// Backend clients shared with the component tree through context
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub auth: Rc<dyn AuthClient>,
    pub feed: Rc<dyn FeedClient>,
}

impl AppServices {
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            auth: Rc::new(FirebaseAuthClient::new(config.clone())),
            feed: Rc::new(FirestoreFeedClient::new(config.clone())),
            config,
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct BlogServicesProps {
    pub children: Element,
}

/// Provide `AppServices` to `children`, or explain why the app cannot start
#[component]
pub fn BlogServices(props: BlogServicesProps) -> Element {
    let services = use_context_provider(|| AppServices::from_config(get_global_config()));

    if let Err(e) = services.config.validate() {
        console_error!("[Blog] {}", e);
        return rsx! {
            ErrorNotice { message: e.to_string() }
        };
    }

    rsx! {
        {props.children}
    }
}
