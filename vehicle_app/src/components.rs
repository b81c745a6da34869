use leptos::*;
use leptos_router::*;

use crate::api::{self, Vehicle};
use crate::format;

#[component]
pub fn VehicleCard(cx: Scope, vehicle: Vehicle) -> impl IntoView {
    let href = api::detail_route(&vehicle.vrm);
    let title = format!("{} {}", vehicle.make, vehicle.model);
    let summary = format!("{} · {}", format::mileage(vehicle.mileage), vehicle.colour);
    let price = format::price(vehicle.price);
    let Vehicle { vrm, variant, .. } = vehicle;
    view! { cx,
        <A href=href>
            <article class="vehicle-card">
                <h3>{title}</h3>
                <p class="variant">{variant}</p>
                <p class="price">{price}</p>
                <p>{summary}</p>
                <span class="vrm">{vrm}</span>
            </article>
        </A>
    }
}

#[component]
pub fn VehicleGrid(cx: Scope, vehicles: Vec<Vehicle>) -> impl IntoView {
    let count = vehicles.len();
    view! { cx,
        <p class="result-count">{format::result_count(count)}</p>
        <div class="vehicle-grid">
            {vehicles
                .into_iter()
                .map(|vehicle| view! { cx, <VehicleCard vehicle=vehicle/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn VehicleDetail(cx: Scope, vehicle: Vehicle) -> impl IntoView {
    let title = format!("{} {} {}", vehicle.make, vehicle.model, vehicle.variant);
    let price = format::price(vehicle.price);
    let mileage = format::mileage(vehicle.mileage);
    let Vehicle {
        vrm,
        make,
        model,
        variant,
        colour,
        body_type,
        date_of_registration,
        ..
    } = vehicle;
    let plate = vrm.clone();
    view! { cx,
        <article class="vehicle-detail">
            <h2>{title}</h2>
            <span class="vrm">{plate}</span>
            <dl>
                <dt>"Registration"</dt><dd>{vrm}</dd>
                <dt>"Make"</dt><dd>{make}</dd>
                <dt>"Model"</dt><dd>{model}</dd>
                <dt>"Variant"</dt><dd>{variant}</dd>
                <dt>"Colour"</dt><dd>{colour}</dd>
                <dt>"Body type"</dt><dd>{body_type}</dd>
                <dt>"Price"</dt><dd>{price}</dd>
                <dt>"Mileage"</dt><dd>{mileage}</dd>
                <dt>"First registered"</dt><dd>{date_of_registration}</dd>
            </dl>
        </article>
    }
}
