//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    home::HomePage, login::LoginPage, login_success::LoginSuccessPage, my_page::MyPage, register::RegisterPage,
    tools::ToolsPage,
};
use crate::state::auth::AuthState;
use crate::state::map_script::MapScriptStatus;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, client config, and map-script status contexts, then
/// resolves any stored token into a session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::bootstrapping());
    let map_script = RwSignal::new(MapScriptStatus::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(map_script);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::net::session::bootstrap(auth, config));
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Stylesheet id="leptos" href="/pkg/tsunami-dashboard.css"/>
        <Title text="Tsunami Prediction"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("login-success") view=LoginSuccessPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("toolspage") view=ToolsPage/>
                <Route path=StaticSegment("mypage") view=MyPage/>
            </Routes>
        </Router>
    }
}
