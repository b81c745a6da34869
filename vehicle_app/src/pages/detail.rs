use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::VehicleDetail;
use crate::state::DetailState;

#[component]
pub fn DetailPage(cx: Scope) -> impl IntoView {
    let params = use_params_map(cx);
    let vrm = move || {
        params.with(|p| p.get("vrm").map(|raw| api::decode_route_vrm(raw)).unwrap_or_default())
    };

    // refetches whenever the route param changes
    let lookup = create_local_resource(cx, vrm, |vrm| async move {
        DetailState::from_result(api::by_vrm(&vrm).await)
    });

    view! { cx,
        <section class="detail">
            <A href="/">"← Back to search"</A>
            {move || match DetailState::shown(lookup.loading().get(), lookup.read(cx)) {
                DetailState::Loading => view! { cx, <p class="loading">"Loading vehicle..."</p> }.into_view(cx),
                DetailState::Found(vehicle) => view! { cx, <VehicleDetail vehicle=vehicle/> }.into_view(cx),
                DetailState::NotFound(message) => view! { cx, <p class="empty">{message}</p> }.into_view(cx),
                DetailState::Failed(message) => view! { cx, <p class="error">{message}</p> }.into_view(cx),
            }}
        </section>
    }
}
