//! The rendered device list.

use devicebox_domain::device::Device;
use devicebox_domain::sanitize::escape_html;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::use_app_state;

/// Every device of the store, in order.
///
/// The whole list is rebuilt on each store change, so no entry outlives the
/// device it was rendered for.
#[component]
pub fn DeviceList() -> impl IntoView {
    let store = use_app_state().store;

    view! {
        {move || {
            store
                .devices()
                .into_iter()
                .map(|device| view! { <DeviceItem device/> })
                .collect_view()
        }}
    }
}

/// A single entry: label opening the details, and a remove button.
#[component]
fn DeviceItem(device: Device) -> impl IntoView {
    let state = use_app_state();
    let (entered, set_entered) = signal(false);

    let delay = u32::try_from(state.config().animation.enter_delay_ms).unwrap_or(u32::MAX);
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        // the entry may already have been re-rendered away
        set_entered.try_set(true);
    });

    let name_html = escape_html(&device.name);
    let kind_html = format!("({})", escape_html(&device.kind));

    let details = device.clone();
    let on_label = move |_| {
        state
            .service
            .with_value(|service| service.show_details(&details));
    };
    let on_delete = move |_| {
        let pending = state
            .service
            .with_value(|service| service.remove(device.clone()));
        spawn_local(async move {
            pending.await;
        });
    };

    view! {
        <li class=move || if entered.get() { "device-item entered" } else { "device-item" }>
            <div class="device-label" on:click=on_label>
                <span inner_html=name_html></span>
                " "
                <span class="device-type" inner_html=kind_html></span>
            </div>
            <div class="device-actions">
                <button class="delete-btn" title="Remove device" on:click=on_delete>
                    "Remove"
                </button>
            </div>
        </li>
    }
}
