//! Task Grid Component
//!
//! "Generate" section: one card per generation task.

use leptos::prelude::*;

use crate::components::{ImageFrame, ImageSizing};
use crate::config::TASK_ICON_PX;
use crate::context::use_theme;
use crate::models::GenerationTask;
use crate::theme::{style_token, ElementRole};

#[component]
pub fn TaskGrid(tasks: &'static [GenerationTask]) -> impl IntoView {
    let theme = use_theme();
    let heading_class = move || format!("{} mb-2", style_token(theme.dark_mode.get(), ElementRole::Heading));

    view! {
        <div class="max-w-9xl mx-auto">
            <h1 class=heading_class>"Generate"</h1>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4 sm:gap-6">
                {tasks.iter().map(|task| view! { <TaskCard task=*task /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TaskCard(task: GenerationTask) -> impl IntoView {
    let theme = use_theme();

    // Placeholder: "Open" has no destination yet
    let on_open = |ev: web_sys::MouseEvent| ev.prevent_default();

    view! {
        <div class=theme.token(ElementRole::TaskCard)>
            <div class="flex items-start">
                <div class="flex-shrink-0">
                    <ImageFrame
                        src=task.image
                        alt=task.task
                        sizing=ImageSizing::Fixed { width: TASK_ICON_PX, height: TASK_ICON_PX }
                        class="rounded-md"
                    />
                </div>

                <div class="ml-3 sm:ml-4 flex-grow">
                    <div class="flex items-center mb-1">
                        <h2 class=theme.token(ElementRole::TaskTitle)>{task.task}</h2>
                        <Show when=move || task.is_new>
                            <span class="text-xs font-semibold text-white bg-blue-500 px-2 py-1 rounded-full">
                                "New"
                            </span>
                        </Show>
                    </div>

                    <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between">
                        <p class=theme.token(ElementRole::TaskText)>{task.text}</p>
                        <button class=theme.token(ElementRole::OpenButton) on:click=on_open>
                            "Open"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
