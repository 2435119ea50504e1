//! Toast Stack Component
//!
//! Renders the transient notifications held in `ToastContext`.

use leptos::prelude::*;

use crate::context::{ToastContext, ToastKind};

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<ToastContext>().expect("ToastContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
