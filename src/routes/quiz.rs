//! Timed quiz-taking page. The attempt lives in a local signal because it owns
//! the pending `Timeout`; every tick fires once and the next one is armed
//! from inside the callback while the countdown is still running.

use crate::app_lib::{AppConfig, AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::quizzes::catalog::Catalog;
use crate::features::quizzes::client::{self, use_catalog};
use crate::features::quizzes::session::{Attempt, QuizResult, QuizSession, Stage, TickOutcome};
use crate::features::quizzes::types::{Question, option_letter};
use crate::routes::not_found::NotFoundContent;
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

type AttemptSignal = RwSignal<Attempt<Timeout>, LocalStorage>;

fn schedule_tick(attempt: AttemptSignal, tick_ms: u32, catalog: Catalog) {
    let handle = Timeout::new(tick_ms, move || {
        match attempt.try_update(|attempt| attempt.tick()) {
            Some(TickOutcome::Running(_)) => schedule_tick(attempt, tick_ms, catalog),
            Some(TickOutcome::Expired(result)) => report_result(catalog, result),
            Some(TickOutcome::Idle) | None => {}
        }
    });
    attempt.update_untracked(|attempt| attempt.arm(handle));
}

fn report_result(catalog: Catalog, result: QuizResult) {
    spawn_local(async move {
        if let Err(err) = client::submit_quiz_result(&catalog, &result).await {
            tracing::warn!(quiz_id = %result.quiz_id, error = %err, "failed to submit quiz result");
        }
    });
}

#[component]
pub fn QuizPage() -> impl IntoView {
    let catalog = use_catalog();
    let tick_ms = use_context::<AppConfig>()
        .unwrap_or_default()
        .tick_interval_ms;
    let params = use_params_map();

    let catalog_for_fetch = catalog.clone();
    let detail = LocalResource::new(move || {
        let raw_id = params.with(|params| params.get("quizId")).unwrap_or_default();
        let catalog = catalog_for_fetch.clone();
        async move { client::quiz_detail(&catalog, &raw_id).await }
    });

    let attempt: AttemptSignal = RwSignal::new_local(Attempt::Loading);

    let catalog_for_start = catalog.clone();
    Effect::new(move |_| {
        let Some(loaded) = detail.get() else {
            return;
        };
        match attempt.try_update(|attempt| attempt.resolve(loaded)) {
            Some(Some(result)) => report_result(catalog_for_start.clone(), result),
            _ => {
                if attempt.with_untracked(Attempt::stage) == Stage::InProgress {
                    schedule_tick(attempt, tick_ms, catalog_for_start.clone());
                }
            }
        }
    });

    on_cleanup(move || {
        attempt.try_update_untracked(Attempt::abandon);
    });

    let stage = Memo::new(move |_| attempt.with(Attempt::stage));

    view! {
        <AppShell>
            {move || match stage.get() {
                Stage::Loading => view! { <Spinner /> }.into_any(),
                Stage::InProgress => {
                    view! { <QuizInProgress attempt=attempt catalog=catalog.clone() /> }.into_any()
                }
                Stage::Finished => {
                    attempt
                        .with_untracked(|attempt| attempt.result().cloned())
                        .map(|result| view! { <QuizResults result=result /> })
                        .into_any()
                }
                Stage::Unavailable => {
                    match attempt.with_untracked(|attempt| attempt.error().cloned()) {
                        Some(AppError::NotFound(_)) => {
                            view! { <NotFoundContent message="This quiz does not exist." /> }
                                .into_any()
                        }
                        Some(err) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => ().into_any(),
                    }
                }
            }}
        </AppShell>
    }
}

#[component]
fn QuizInProgress(attempt: AttemptSignal, catalog: Catalog) -> impl IntoView {
    let read = move |f: fn(&QuizSession<Timeout>) -> String| {
        attempt.with(|attempt| attempt.session().map(f).unwrap_or_default())
    };
    let question = Memo::new(move |_| {
        attempt.with(|attempt| attempt.session().and_then(|session| session.current_question().cloned()))
    });
    let selected = Memo::new(move |_| {
        attempt.with(|attempt| attempt.session().and_then(QuizSession::selected_option))
    });
    let is_first = Signal::derive(move || {
        attempt.with(|attempt| attempt.session().map_or(true, QuizSession::is_first))
    });
    let is_last = Memo::new(move |_| {
        attempt.with(|attempt| attempt.session().is_some_and(QuizSession::is_last))
    });

    let finish = Callback::new(move |_: MouseEvent| {
        if let Some(result) = attempt.try_update(Attempt::finish).flatten() {
            report_result(catalog.clone(), result);
        }
    });

    view! {
        <div class="max-w-3xl mx-auto">
            <div class=format!("{} p-6", Theme::CARD)>
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">
                        {move || read(|session| session.quiz().title.clone())}
                    </h2>
                    <div class="flex items-center text-purple-600 font-mono font-semibold">
                        "⏱ " {move || read(QuizSession::time_label)}
                    </div>
                </div>

                <div class="w-full bg-gray-200 rounded-full h-2 mb-6">
                    <div
                        class="bg-purple-600 h-2 rounded-full transition-all duration-300"
                        style:width=move || {
                            let progress = attempt
                                .with(|attempt| attempt.session().map_or(0.0, QuizSession::progress_percent));
                            format!("{progress}%")
                        }
                    ></div>
                </div>

                <p class="text-sm text-gray-500 dark:text-gray-400 mb-2">
                    {move || {
                        read(|session| {
                            format!("Question {} of {}", session.current_index() + 1, session.question_count())
                        })
                    }}
                </p>

                {move || {
                    question
                        .get()
                        .map(|question| view! { <QuestionCard attempt=attempt question=question selected=selected /> })
                }}

                <div class="flex justify-between mt-8">
                    <button
                        type="button"
                        class=Theme::SECONDARY_BUTTON
                        class:opacity-50=move || is_first.get()
                        class:cursor-not-allowed=move || is_first.get()
                        disabled=move || is_first.get()
                        on:click=move |_| attempt.update(Attempt::go_previous)
                    >
                        "Previous"
                    </button>
                    <Show
                        when=move || is_last.get()
                        fallback=move || {
                            view! {
                                <Button on_click=Callback::new(move |_: MouseEvent| attempt.update(Attempt::go_next))>
                                    "Next"
                                </Button>
                            }
                        }
                    >
                        <Button on_click=finish>"Finish Quiz"</Button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn QuestionCard(
    attempt: AttemptSignal,
    question: Question,
    selected: Memo<Option<usize>>,
) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">{question.text}</h3>
            <div class="space-y-3">
                {question
                    .options
                    .into_iter()
                    .enumerate()
                    .map(|(index, option)| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if selected.get() == Some(index) {
                                        Theme::OPTION_SELECTED
                                    } else {
                                        Theme::OPTION
                                    }
                                }
                                on:click=move |_| {
                                    attempt.update(|attempt| {
                                        attempt.select_answer(index);
                                    });
                                }
                            >
                                <span class="inline-flex items-center justify-center w-8 h-8 mr-3 rounded-full bg-purple-100 text-purple-700 font-semibold">
                                    {option_letter(index).to_string()}
                                </span>
                                {option}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn QuizResults(result: QuizResult) -> impl IntoView {
    let heading = if result.timed_out { "Time's up!" } else { "Quiz Complete!" };
    let summary = format!(
        "You answered {} of {} questions, {} correct.",
        result.answered_count, result.question_count, result.correct_count
    );

    view! {
        <div class="max-w-3xl mx-auto">
            <div class=format!("{} p-8 text-center", Theme::CARD)>
                <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">{heading}</h2>
                <p class="text-gray-500 dark:text-gray-400 mb-6">{result.title}</p>
                <div class="text-6xl font-bold text-purple-600 mb-4">
                    {format!("{}%", result.display_percent())}
                </div>
                <p class="text-gray-600 dark:text-gray-300 mb-8">{summary}</p>
                <A
                    href=paths::DASHBOARD
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-purple-600 rounded-lg hover:bg-purple-700 transition-colors"
                >
                    "Back to Dashboard"
                </A>
            </div>
        </div>
    }
}
