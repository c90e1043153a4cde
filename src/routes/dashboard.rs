//! Dashboard listing the quiz catalog, with entry points to authoring and to
//! taking a quiz.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::quizzes::client::{self, use_catalog};
use crate::features::quizzes::types::QuizSummary;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const LINK_BUTTON: &str = "inline-flex items-center justify-center gap-2 bg-purple-600 text-white font-medium rounded-lg text-sm px-5 py-2.5 hover:bg-purple-700 transition-colors";

/// Renders the catalog grid.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let catalog = use_catalog();
    let quizzes = LocalResource::new(move || {
        let catalog = catalog.clone();
        async move { client::list_quizzes(&catalog).await }
    });

    view! {
        <AppShell>
            <div class="space-y-8">
                <A href=paths::CREATE_QUIZ {..} class=LINK_BUTTON>
                    <span class="text-lg leading-none">"+"</span>
                    "Create New Quiz"
                </A>

                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match quizzes.get() {
                        Some(Ok(list)) if list.is_empty() => {
                            view! {
                                <div class="text-center py-12 bg-white dark:bg-gray-800 rounded-lg border border-dashed border-gray-300 dark:border-gray-700">
                                    <h3 class="text-sm font-medium text-gray-900 dark:text-white">
                                        "No quizzes yet"
                                    </h3>
                                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                        "Get started by creating the first one."
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                        Some(Ok(list)) => {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    <For
                                        each=move || list.clone()
                                        key=|quiz| quiz.id
                                        children=|quiz| view! { <QuizCard quiz=quiz /> }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}

#[component]
fn QuizCard(quiz: QuizSummary) -> impl IntoView {
    let target = paths::quiz(quiz.id);

    view! {
        <div class=format!("{} overflow-hidden hover:shadow-xl transition-shadow duration-300", Theme::CARD)>
            <div class="p-6">
                <div class="flex justify-between items-start">
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{quiz.title}</h3>
                    <span class=quiz.difficulty.badge_class()>{quiz.difficulty.label()}</span>
                </div>
                <p class="mt-2 text-gray-600 dark:text-gray-300">{quiz.description}</p>
                <div class="mt-4 flex items-center text-sm text-gray-500 dark:text-gray-400 gap-4">
                    <span>"⏱ " {quiz.time_limit_label}</span>
                    <span>"❓ " {quiz.question_count} " questions"</span>
                    <span>"👥 " {quiz.participant_count}</span>
                </div>
                <A href=target {..} class=format!("mt-4 w-full {LINK_BUTTON}")>
                    "Start Quiz"
                </A>
            </div>
        </div>
    }
}
