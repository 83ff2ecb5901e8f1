use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    AdminOnly, Admin, Applications, Dashboard, Drives, Landing, MockTests, NotFound, Profile,
    Protected, Resources, SessionGate,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[layout(SessionGate)]
        #[layout(Protected)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/drives")]
            Drives {},
            #[route("/applications")]
            Applications {},
            #[route("/tests")]
            MockTests {},
            #[route("/resources")]
            Resources {},
            #[route("/profile")]
            Profile {},
        #[end_layout]
        #[layout(AdminOnly)]
            #[route("/admin")]
            Admin {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::APP_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
