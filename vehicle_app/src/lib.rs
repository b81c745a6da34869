use leptos::*;
use leptos_router::*;

pub mod api;
mod components;
pub mod format;
mod pages;
pub mod state;

use pages::{DetailPage, HomePage};

#[component]
fn UnknownRoute(cx: Scope) -> impl IntoView {
    view! { cx,
        <section>
            <p class="empty">"There is nothing at this address."</p>
            <A href="/">"Back to search"</A>
        </section>
    }
}

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    view! { cx,
        <Router>
            <header class="app-header">
                <A href="/">"Vehicle Finder"</A>
            </header>
            <main>
                <Routes>
                    <Route path="/" view=|cx| view! { cx, <HomePage/> }/>
                    <Route path="/vehicle/:vrm" view=|cx| view! { cx, <DetailPage/> }/>
                    <Route path="/*any" view=|cx| view! { cx, <UnknownRoute/> }/>
                </Routes>
            </main>
        </Router>
    }
}
