//! Quiz-taking state machine.
//!
//! `Loading -> InProgress -> Finished` is the normal path; `Unavailable`
//! covers unknown ids and quizzes that cannot be played. `Finished` is
//! terminal: answers are frozen into a [`QuizResult`] and the countdown has
//! been cancelled. Leaving the page drops the attempt, which cancels any
//! pending tick through [`Countdown`]'s `Drop`.

use crate::app_lib::AppError;
use crate::features::quizzes::scoring::{self, Answers};
use crate::features::quizzes::timer::{Countdown, TickHandle};
use crate::features::quizzes::types::{Question, QuizDetail, QuizId};

/// Coarse phase used by the view to pick which screen to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Loading,
    InProgress,
    Finished,
    Unavailable,
}

pub enum Attempt<H: TickHandle> {
    Loading,
    InProgress(QuizSession<H>),
    Finished(QuizResult),
    Unavailable(AppError),
}

/// What a countdown tick did to the attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// Still running; schedule the next tick.
    Running(u32),
    /// Time ran out and the attempt finished.
    Expired(QuizResult),
    /// No session in progress; nothing to schedule.
    Idle,
}

/// Per-visit progress through one quiz.
pub struct QuizSession<H: TickHandle> {
    quiz: QuizDetail,
    current: usize,
    answers: Answers,
    countdown: Countdown<H>,
}

/// Frozen outcome of a finished attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizResult {
    pub quiz_id: QuizId,
    pub title: String,
    pub correct_count: usize,
    pub answered_count: usize,
    pub question_count: usize,
    pub seconds_remaining: u32,
    pub timed_out: bool,
    pub answers: Answers,
}

impl QuizResult {
    pub fn score_percent(&self) -> f64 {
        scoring::percent(self.correct_count, self.question_count)
    }

    pub fn display_percent(&self) -> u32 {
        scoring::display_percent(self.score_percent())
    }
}

impl<H: TickHandle> QuizSession<H> {
    fn start(quiz: QuizDetail) -> Self {
        let countdown = Countdown::new(quiz.time_limit_seconds());
        Self {
            quiz,
            current: 0,
            answers: Answers::new(),
            countdown,
        }
    }

    pub fn quiz(&self) -> &QuizDetail {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.question_count()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.answers.get(&self.current).copied()
    }

    pub fn is_answered(&self, question_index: usize) -> bool {
        self.answers.contains_key(&question_index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.seconds_remaining()
    }

    pub fn time_label(&self) -> String {
        scoring::format_time(self.seconds_remaining())
    }

    pub fn progress_percent(&self) -> f64 {
        scoring::progress_percent(self.current, self.question_count())
    }

    /// Records (or overwrites) the answer for the current question and
    /// moves on, unless this is the last question. Options outside the
    /// current question are ignored.
    fn select_answer(&mut self, option_index: usize) -> bool {
        let option_count = self
            .current_question()
            .map_or(0, |question| question.options.len());
        if option_index >= option_count {
            tracing::warn!(
                quiz_id = %self.quiz.id,
                question = self.current,
                option_index,
                "ignoring answer outside the question's options"
            );
            return false;
        }

        self.answers.insert(self.current, option_index);
        if !self.is_last() {
            self.current += 1;
        }
        true
    }

    fn go_previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    fn go_next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    fn into_result(mut self, timed_out: bool) -> QuizResult {
        self.countdown.stop();
        let correct_count = scoring::correct_count(&self.quiz.questions, &self.answers);
        let result = QuizResult {
            quiz_id: self.quiz.id,
            title: std::mem::take(&mut self.quiz.title),
            correct_count,
            answered_count: self.answers.len(),
            question_count: self.quiz.questions.len(),
            seconds_remaining: self.countdown.seconds_remaining(),
            timed_out,
            answers: std::mem::take(&mut self.answers),
        };
        tracing::debug!(
            quiz_id = %result.quiz_id,
            correct = result.correct_count,
            answered = result.answered_count,
            timed_out,
            "quiz attempt finished"
        );
        result
    }
}

impl<H: TickHandle> Default for Attempt<H> {
    fn default() -> Self {
        Attempt::Loading
    }
}

impl<H: TickHandle> Attempt<H> {
    pub fn stage(&self) -> Stage {
        match self {
            Attempt::Loading => Stage::Loading,
            Attempt::InProgress(_) => Stage::InProgress,
            Attempt::Finished(_) => Stage::Finished,
            Attempt::Unavailable(_) => Stage::Unavailable,
        }
    }

    pub fn session(&self) -> Option<&QuizSession<H>> {
        match self {
            Attempt::InProgress(session) => Some(session),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            Attempt::Finished(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Attempt::Unavailable(err) => Some(err),
            _ => None,
        }
    }

    /// Applies the outcome of loading the quiz detail. Any previous session
    /// is replaced (and its countdown cancelled). Returns the result when
    /// the quiz has no time at all and finishes on the spot.
    pub fn resolve(&mut self, loaded: Result<QuizDetail, AppError>) -> Option<QuizResult> {
        match loaded {
            Ok(quiz) if quiz.questions.is_empty() => {
                tracing::warn!(quiz_id = %quiz.id, "refusing to start a quiz without questions");
                *self = Attempt::Unavailable(AppError::LoadFailure(format!(
                    "\"{}\" has no questions yet.",
                    quiz.title
                )));
                None
            }
            Ok(quiz) => {
                tracing::debug!(
                    quiz_id = %quiz.id,
                    questions = quiz.questions.len(),
                    seconds = quiz.time_limit_seconds(),
                    "quiz attempt started"
                );
                let session = QuizSession::start(quiz);
                if session.countdown.is_expired() {
                    let result = session.into_result(true);
                    *self = Attempt::Finished(result.clone());
                    Some(result)
                } else {
                    *self = Attempt::InProgress(session);
                    None
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz unavailable");
                *self = Attempt::Unavailable(err);
                None
            }
        }
    }

    /// Hands the next scheduled tick to the running session. Outside
    /// `InProgress` the tick is cancelled straight away.
    pub fn arm(&mut self, handle: H) {
        match self {
            Attempt::InProgress(session) => session.countdown.arm(handle),
            _ => handle.cancel(),
        }
    }

    /// Called when the armed tick fires.
    pub fn tick(&mut self) -> TickOutcome {
        let Attempt::InProgress(session) = self else {
            return TickOutcome::Idle;
        };
        let remaining = session.countdown.fired();
        if remaining > 0 {
            return TickOutcome::Running(remaining);
        }
        self.complete(true)
            .map_or(TickOutcome::Idle, TickOutcome::Expired)
    }

    pub fn select_answer(&mut self, option_index: usize) -> bool {
        match self {
            Attempt::InProgress(session) => session.select_answer(option_index),
            _ => false,
        }
    }

    pub fn go_previous(&mut self) {
        if let Attempt::InProgress(session) = self {
            session.go_previous();
        }
    }

    pub fn go_next(&mut self) {
        if let Attempt::InProgress(session) = self {
            session.go_next();
        }
    }

    /// Explicit finish. Returns the result the first time only.
    pub fn finish(&mut self) -> Option<QuizResult> {
        self.complete(false)
    }

    /// Stops the countdown when the page goes away mid-attempt.
    pub fn abandon(&mut self) {
        if let Attempt::InProgress(session) = self {
            tracing::debug!(quiz_id = %session.quiz.id, "quiz attempt abandoned");
            session.countdown.stop();
        }
    }

    fn complete(&mut self, timed_out: bool) -> Option<QuizResult> {
        match std::mem::take(self) {
            Attempt::InProgress(session) => {
                let result = session.into_result(timed_out);
                *self = Attempt::Finished(result.clone());
                Some(result)
            }
            other => {
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::quizzes::timer::testing::{ProbeTick, TickProbe};

    fn quiz(keys: &[usize], minutes: u32) -> QuizDetail {
        QuizDetail {
            id: QuizId::new(1),
            title: "General Knowledge".to_string(),
            description: "Mixed bag".to_string(),
            time_limit_minutes: minutes,
            questions: keys
                .iter()
                .enumerate()
                .map(|(index, key)| Question {
                    id: index as u32 + 1,
                    text: format!("Question {}", index + 1),
                    options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    correct_option_index: *key,
                })
                .collect(),
        }
    }

    fn started(keys: &[usize], minutes: u32) -> Attempt<ProbeTick> {
        let mut attempt = Attempt::default();
        assert_eq!(attempt.stage(), Stage::Loading);
        assert_eq!(attempt.resolve(Ok(quiz(keys, minutes))), None);
        attempt
    }

    fn current(attempt: &Attempt<ProbeTick>) -> usize {
        attempt.session().expect("in progress").current_index()
    }

    #[test]
    fn resolve_initializes_session() {
        let attempt = started(&[2, 1, 2], 10);
        let session = attempt.session().expect("in progress");
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.seconds_remaining(), 600);
        assert_eq!(session.time_label(), "10:00");
    }

    #[test]
    fn select_answer_advances_except_on_last_question() {
        let mut attempt = started(&[0, 0, 0], 10);
        assert!(attempt.select_answer(1));
        assert_eq!(current(&attempt), 1);
        assert!(attempt.select_answer(1));
        assert_eq!(current(&attempt), 2);
        assert!(attempt.select_answer(3));
        assert_eq!(current(&attempt), 2);
        assert_eq!(attempt.stage(), Stage::InProgress);
    }

    #[test]
    fn select_answer_overwrites_previous_choice() {
        let mut attempt = started(&[0, 0], 10);
        attempt.select_answer(2);
        attempt.go_previous();
        attempt.select_answer(0);
        let session = attempt.session().expect("in progress");
        assert_eq!(session.answered_count(), 1);
        assert_eq!(current(&attempt), 1);

        let result = attempt.finish().expect("result");
        assert_eq!(result.answers.get(&0), Some(&0));
        assert_eq!(result.correct_count, 1);
    }

    #[test]
    fn select_answer_ignores_out_of_range_option() {
        let mut attempt = started(&[0, 0], 10);
        assert!(!attempt.select_answer(4));
        assert_eq!(current(&attempt), 0);
        assert!(!attempt.session().expect("in progress").is_answered(0));
    }

    #[test]
    fn go_previous_at_first_question_is_noop() {
        let mut attempt = started(&[0, 0], 10);
        attempt.go_previous();
        assert_eq!(current(&attempt), 0);
    }

    #[test]
    fn navigation_keeps_answers_and_stops_at_last() {
        let mut attempt = started(&[0, 1], 10);
        attempt.select_answer(0);
        attempt.go_previous();
        assert_eq!(current(&attempt), 0);
        assert!(attempt.session().expect("in progress").is_answered(0));
        attempt.go_next();
        attempt.go_next();
        assert_eq!(current(&attempt), 1);
    }

    #[test]
    fn three_question_scenario_scores_67_percent() {
        let mut attempt = started(&[2, 1, 2], 10);
        attempt.select_answer(2);
        attempt.select_answer(1);
        attempt.select_answer(0);

        let result = attempt.finish().expect("result");
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.answered_count, 3);
        assert_eq!(result.question_count, 3);
        assert_eq!(result.display_percent(), 67);
        assert!(!result.timed_out);
        assert_eq!(attempt.stage(), Stage::Finished);
    }

    #[test]
    fn finished_attempt_is_read_only() {
        let mut attempt = started(&[0, 0], 10);
        attempt.select_answer(0);
        let result = attempt.finish().expect("result");

        assert!(!attempt.select_answer(1));
        attempt.go_previous();
        assert_eq!(attempt.finish(), None);
        assert_eq!(attempt.tick(), TickOutcome::Idle);
        assert_eq!(attempt.result(), Some(&result));
    }

    #[test]
    fn six_hundred_ticks_expire_a_ten_minute_quiz() {
        let probe = TickProbe::default();
        let mut attempt = started(&[0, 1, 2], 10);

        let mut expired = None;
        for tick in 1..=600 {
            attempt.arm(probe.handle());
            match attempt.tick() {
                TickOutcome::Running(remaining) => assert_eq!(remaining, 600 - tick),
                TickOutcome::Expired(result) => {
                    assert_eq!(tick, 600);
                    expired = Some(result);
                }
                TickOutcome::Idle => panic!("tick {tick} found no session"),
            }
        }

        let result = expired.expect("expired on the last tick");
        assert!(result.timed_out);
        assert_eq!(result.seconds_remaining, 0);
        assert_eq!(attempt.stage(), Stage::Finished);
        assert_eq!(probe.cancellations(), 0);
    }

    #[test]
    fn explicit_finish_cancels_pending_tick_once() {
        let probe = TickProbe::default();
        let mut attempt = started(&[0], 1);
        attempt.arm(probe.handle());

        attempt.finish().expect("result");
        attempt.abandon();
        drop(attempt);
        assert_eq!(probe.cancellations(), 1);
    }

    #[test]
    fn abandon_cancels_pending_tick_once() {
        let probe = TickProbe::default();
        let mut attempt = started(&[0], 1);
        attempt.arm(probe.handle());

        attempt.abandon();
        drop(attempt);
        assert_eq!(probe.cancellations(), 1);
    }

    #[test]
    fn dropping_running_attempt_cancels_pending_tick() {
        let probe = TickProbe::default();
        let mut attempt = started(&[0], 1);
        attempt.arm(probe.handle());
        drop(attempt);
        assert_eq!(probe.cancellations(), 1);
    }

    #[test]
    fn arming_outside_progress_cancels_immediately() {
        let probe = TickProbe::default();
        let mut attempt: Attempt<ProbeTick> = Attempt::default();
        attempt.arm(probe.handle());
        assert_eq!(probe.cancellations(), 1);
    }

    #[test]
    fn empty_quiz_is_rejected_at_load() {
        let mut attempt: Attempt<ProbeTick> = Attempt::default();
        assert_eq!(attempt.resolve(Ok(quiz(&[], 10))), None);
        assert_eq!(attempt.stage(), Stage::Unavailable);
        assert!(matches!(attempt.error(), Some(AppError::LoadFailure(_))));
    }

    #[test]
    fn zero_time_limit_finishes_immediately() {
        let mut attempt: Attempt<ProbeTick> = Attempt::default();
        let result = attempt.resolve(Ok(quiz(&[0, 1], 0))).expect("result");
        assert!(result.timed_out);
        assert_eq!(result.display_percent(), 0);
        assert_eq!(attempt.stage(), Stage::Finished);
    }

    #[test]
    fn load_error_is_surfaced() {
        let mut attempt: Attempt<ProbeTick> = Attempt::default();
        attempt.resolve(Err(AppError::NotFound("quiz \"9\"".to_string())));
        assert_eq!(attempt.stage(), Stage::Unavailable);
        assert_eq!(
            attempt.error(),
            Some(&AppError::NotFound("quiz \"9\"".to_string()))
        );
    }

    #[test]
    fn progress_tracks_current_question() {
        let mut attempt = started(&[0, 0, 0, 0], 5);
        assert_eq!(attempt.session().expect("in progress").progress_percent(), 25.0);
        attempt.go_next();
        assert_eq!(attempt.session().expect("in progress").progress_percent(), 50.0);
    }
}
