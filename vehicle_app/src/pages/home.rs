use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::VehicleGrid;
use crate::state::HomeState;

#[component]
pub fn HomePage(cx: Scope) -> impl IntoView {
    let (query, set_query) = create_signal(cx, String::new());
    let (state, set_state) = create_signal(cx, HomeState::Idle);

    let run_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let q = match HomeState::validate_query(&query.get()) {
            Ok(q) => q,
            Err(rejected) => {
                set_state.set(rejected);
                return;
            }
        };
        set_state.set(HomeState::Searching);
        spawn_local(async move {
            set_state.set(HomeState::from_result(api::search(&q).await));
        });
    };

    let view_all = move |_: ev::MouseEvent| {
        set_state.set(HomeState::Searching);
        spawn_local(async move {
            set_state.set(HomeState::from_result(api::list_all().await));
        });
    };

    view! { cx,
        <section class="home">
            <h1>"Find a vehicle"</h1>
            <form class="search-form" on:submit=run_search>
                <input
                    type="text"
                    placeholder="Registration, make, model, colour or price"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
                <button type="button" on:click=view_all>"View all"</button>
            </form>
            {move || match state.get() {
                HomeState::Idle => view! { cx,
                    <p class="hint">"Search by registration, make, model, colour, price or mileage."</p>
                }.into_view(cx),
                HomeState::Searching => view! { cx, <p class="loading">"Searching..."</p> }.into_view(cx),
                HomeState::Results(vehicles) => view! { cx, <VehicleGrid vehicles=vehicles/> }.into_view(cx),
                HomeState::Empty(message) => view! { cx, <p class="empty">{message}</p> }.into_view(cx),
                HomeState::Failed(message) => view! { cx, <p class="error">{message}</p> }.into_view(cx),
            }}
        </section>
    }
}
