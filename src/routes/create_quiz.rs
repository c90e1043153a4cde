//! Quiz authoring form. All edits go through `QuizDraft` so the bounds and
//! "at least one question" rules live in one place; the view only renders
//! and reports the errors it returns.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::quizzes::client::{self, use_catalog};
use crate::features::quizzes::draft::{DraftField, OPTIONS_PER_QUESTION, QuizDraft};
use crate::features::quizzes::types::{Difficulty, option_letter};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Writes the error of a rejected edit to the form's alert.
fn report(set_error: WriteSignal<Option<AppError>>, result: Result<(), AppError>) {
    if let Err(err) = result {
        tracing::debug!(error = %err, "draft edit rejected");
        set_error.set(Some(err));
    }
}

#[component]
pub fn CreateQuizPage() -> impl IntoView {
    let catalog = use_catalog();
    let navigate = use_navigate();
    let draft = RwSignal::new(QuizDraft::default());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |draft: &QuizDraft| {
        let draft = draft.clone();
        let catalog = catalog.clone();
        async move { client::create_quiz(&catalog, &draft).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_summary) => navigate(paths::DASHBOARD, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        if let Err(err) = draft.with_untracked(QuizDraft::validate) {
            set_error.set(Some(err));
            return;
        }
        create_action.dispatch(draft.get_untracked());
    };

    view! {
        <AppShell>
            <div class="max-w-4xl mx-auto">
                <div class=format!("{} p-6 mb-8", Theme::CARD)>
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                        "Create New Quiz"
                    </h2>
                    <form on:submit=on_submit class="space-y-6">
                        <QuizDetailsFields draft=draft set_error=set_error />

                        <div class="space-y-6">
                            <For
                                each=move || 0..draft.with(QuizDraft::question_count)
                                key=|index| *index
                                children=move |index| {
                                    view! { <QuestionEditor draft=draft index=index set_error=set_error /> }
                                }
                            />
                            <button
                                type="button"
                                class="w-full py-2 px-4 rounded-md text-sm font-medium text-purple-600 bg-purple-100 hover:bg-purple-200"
                                on:click=move |_| {
                                    draft.update(|draft| {
                                        draft.add_question();
                                    });
                                }
                            >
                                "Add Question"
                            </button>
                        </div>

                        {move || {
                            error
                                .get()
                                .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                        }}

                        <div class="flex justify-end gap-4">
                            <A href=paths::DASHBOARD {..} class=Theme::SECONDARY_BUTTON>
                                "Cancel"
                            </A>
                            <Button button_type="submit" disabled=create_action.pending()>
                                "Create Quiz"
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </AppShell>
    }
}

#[component]
fn QuizDetailsFields(
    draft: RwSignal<QuizDraft>,
    set_error: WriteSignal<Option<AppError>>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <label class=Theme::LABEL for="quiz-title">"Quiz Title"</label>
                <input
                    id="quiz-title"
                    type="text"
                    required
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.title.clone())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        draft.update(|draft| report(set_error, draft.update_field(DraftField::Title(value))));
                    }
                />
            </div>
            <div>
                <label class=Theme::LABEL for="quiz-description">"Description"</label>
                <textarea
                    id="quiz-description"
                    required
                    rows="3"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.description.clone())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        draft.update(|draft| {
                            report(set_error, draft.update_field(DraftField::Description(value)))
                        });
                    }
                ></textarea>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="quiz-time-limit">"Time Limit (minutes)"</label>
                    <input
                        id="quiz-time-limit"
                        type="number"
                        min="1"
                        required
                        class=Theme::INPUT
                        prop:value=move || draft.with(|draft| draft.time_limit_minutes.to_string())
                        on:input=move |event| {
                            // Partial input such as "" is left for the browser to flag.
                            if let Ok(minutes) = event_target_value(&event).trim().parse::<u32>() {
                                draft.update(|draft| {
                                    report(set_error, draft.update_field(DraftField::TimeLimitMinutes(minutes)))
                                });
                            }
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="quiz-difficulty">"Difficulty"</label>
                    <select
                        id="quiz-difficulty"
                        class=Theme::INPUT
                        prop:value=move || draft.with(|draft| draft.difficulty.label())
                        on:change=move |event| {
                            if let Some(difficulty) = Difficulty::from_label(&event_target_value(&event)) {
                                draft.update(|draft| {
                                    report(set_error, draft.update_field(DraftField::Difficulty(difficulty)))
                                });
                            }
                        }
                    >
                        {Difficulty::ALL
                            .into_iter()
                            .map(|difficulty| {
                                view! { <option value=difficulty.label()>{difficulty.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}

#[component]
fn QuestionEditor(
    draft: RwSignal<QuizDraft>,
    index: usize,
    set_error: WriteSignal<Option<AppError>>,
) -> impl IntoView {
    let radio_group = format!("correct-{index}");

    view! {
        <div class="bg-gray-50 dark:bg-gray-900/50 rounded-lg p-6 relative">
            <Show when=move || draft.with(QuizDraft::can_remove_question)>
                <button
                    type="button"
                    class="absolute top-2 right-2 text-red-500 hover:text-red-700"
                    aria-label=format!("Remove question {}", index + 1)
                    on:click=move |_| {
                        draft.update(|draft| report(set_error, draft.remove_question(index).map(|_| ())));
                    }
                >
                    "✕"
                </button>
            </Show>

            <div class="mb-4">
                <label class=Theme::LABEL>{format!("Question {}", index + 1)}</label>
                <input
                    type="text"
                    required
                    class=Theme::INPUT
                    prop:value=move || {
                        draft.with(|draft| {
                            draft.questions().get(index).map(|question| question.text.clone()).unwrap_or_default()
                        })
                    }
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        draft.update(|draft| report(set_error, draft.update_question_text(index, value)));
                    }
                />
            </div>

            <div class="space-y-3">
                {(0..OPTIONS_PER_QUESTION)
                    .map(|option_index| {
                        let radio_group = radio_group.clone();
                        view! {
                            <div class="flex items-center">
                                <input
                                    type="radio"
                                    name=radio_group
                                    class="mr-3"
                                    aria-label=format!("Mark option {} correct", option_letter(option_index))
                                    prop:checked=move || {
                                        draft.with(|draft| {
                                            draft
                                                .questions()
                                                .get(index)
                                                .is_some_and(|question| question.correct_option_index == option_index)
                                        })
                                    }
                                    on:change=move |_| {
                                        draft.update(|draft| {
                                            report(set_error, draft.set_correct_answer(index, option_index))
                                        });
                                    }
                                />
                                <input
                                    type="text"
                                    required
                                    placeholder=format!("Option {}", option_index + 1)
                                    class="flex-1 bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 p-2.5"
                                    prop:value=move || {
                                        draft.with(|draft| {
                                            draft
                                                .questions()
                                                .get(index)
                                                .map(|question| question.options[option_index].clone())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:input=move |event| {
                                        let value = event_target_value(&event);
                                        draft.update(|draft| {
                                            report(set_error, draft.update_option(index, option_index, value))
                                        });
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
