use leptos::prelude::*;

use crate::api::Citation;
use crate::components::design_system::{Badge, BadgeVariant};
use crate::services::chat_session::{ChatTurn, TurnRole};

/// A single transcript turn with role-based styling and citation cards
#[component]
pub fn ChatMessage(turn: ChatTurn) -> impl IntoView {
    let is_user = turn.role == TurnRole::User;

    let bubble_class = if is_user {
        "bg-gradient-to-br from-purple-500 to-pink-500 text-white rounded-2xl px-5 py-4 max-w-3xl"
    } else if turn.is_error {
        "bg-red-50 border border-red-200 text-red-900 rounded-2xl px-5 py-4 max-w-3xl"
    } else {
        "bg-white border border-gray-200 text-gray-900 shadow-sm rounded-2xl px-5 py-4 max-w-3xl"
    };

    let sources = (!turn.sources.is_empty()).then(|| {
        view! { <SourceList sources=turn.sources.clone() /> }
    });

    view! {
        <div class=format!(
            "flex flex-col {}",
            if is_user { "items-end" } else { "items-start" },
        )>
            <div class=bubble_class>
                <div class="whitespace-pre-wrap text-sm leading-relaxed">{turn.content.clone()}</div>
            </div>
            {sources}
        </div>
    }
}

/// Citation cards listed under an assistant turn
#[component]
fn SourceList(sources: Vec<Citation>) -> impl IntoView {
    let count = sources.len();

    view! {
        <div class="mt-3 space-y-2 max-w-3xl w-full">
            <div class="flex items-center gap-2 text-xs text-gray-500 font-medium">
                <span>{format!("Sources ({})", count)}</span>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-2">
                {sources.into_iter().enumerate().map(|(idx, source)| {
                    // The backend omits line numbers for non-text chunks;
                    // fall back to line 1 for display.
                    let start = source.start_line.unwrap_or(1);
                    let end = source.end_line.or(source.start_line).unwrap_or(1);

                    view! {
                        <div class="p-3 bg-gray-50 border border-gray-200 rounded-lg text-xs">
                            <div class="flex items-center gap-2 mb-1 font-semibold text-gray-900">
                                <span class="bg-indigo-500 text-white px-2 py-0.5 rounded-full text-[10px]">
                                    {idx + 1}
                                </span>
                                <span class="truncate">{source.document_name.clone()}</span>
                            </div>
                            <div class="flex items-center gap-2 mb-1 flex-wrap text-blue-600">
                                {source.page_number.map(|page| view! {
                                    <Badge variant=BadgeVariant::Info>{format!("Page {}", page)}</Badge>
                                })}
                                <span>{format!("Lines {}-{}", start, end)}</span>
                            </div>
                            <p class="text-gray-600 line-clamp-2">{source.chunk_text.clone()}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
