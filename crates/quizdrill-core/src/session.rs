//! Play-session engine.
//!
//! A session draws every stored quiz once, in random order, and stops at the
//! first wrong answer, when the pool runs out, or when input fails.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::answer::Verdict;
use crate::error::PromptError;
use crate::model::QuizItem;
use crate::traits::{Prompter, QuestionStore};

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the question set.
    Loading,
    /// At least one question is left to ask.
    AwaitingAnswer,
    Won,
    Lost,
    Aborted,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SessionState::Won | SessionState::Lost | SessionState::Aborted
        )
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SessionOutcome {
    /// Every question was answered correctly.
    Won { score: usize },
    /// A wrong answer ended the session.
    Lost { score: usize },
    /// Loading or input failed before the session could finish.
    Aborted { score: usize, reason: String },
}

impl SessionOutcome {
    pub fn score(&self) -> usize {
        match self {
            SessionOutcome::Won { score }
            | SessionOutcome::Lost { score }
            | SessionOutcome::Aborted { score, .. } => *score,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, SessionOutcome::Aborted { .. })
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionOutcome::Won { score } => write!(f, "won with score {score}"),
            SessionOutcome::Lost { score } => write!(f, "lost with score {score}"),
            SessionOutcome::Aborted { score, reason } => {
                write!(f, "aborted with score {score}: {reason}")
            }
        }
    }
}

/// Callbacks fired while a session runs.
pub trait SessionObserver: Send + Sync {
    fn on_question(&self, quiz: &QuizItem, remaining: usize);
    fn on_answer(&self, quiz: &QuizItem, verdict: Verdict, score: usize);
}

/// No-op session observer.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_question(&self, _: &QuizItem, _: usize) {}
    fn on_answer(&self, _: &QuizItem, _: Verdict, _: usize) {}
}

/// One play-through over a snapshot of the question set.
///
/// The random source is injected so tests can reproduce the draw order.
pub struct PlaySession<R> {
    pool: Vec<QuizItem>,
    pending: Option<QuizItem>,
    score: usize,
    state: SessionState,
    abort_reason: Option<String>,
    rng: R,
}

impl<R: Rng> PlaySession<R> {
    pub fn new(rng: R) -> Self {
        Self {
            pool: Vec::new(),
            pending: None,
            score: 0,
            state: SessionState::Loading,
            abort_reason: None,
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Questions not yet drawn.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Fill the pool. An empty question set wins immediately.
    pub fn load(&mut self, items: Vec<QuizItem>) {
        if self.state != SessionState::Loading {
            return;
        }
        tracing::debug!(count = items.len(), "session loaded");
        self.pool = items;
        self.state = if self.pool.is_empty() {
            SessionState::Won
        } else {
            SessionState::AwaitingAnswer
        };
    }

    /// End the session with `reason`, keeping the score earned so far.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.state.is_terminal() {
            return;
        }
        self.pending = None;
        self.abort_reason = Some(reason.into());
        self.state = SessionState::Aborted;
    }

    /// Remove a uniformly random question from the pool and make it pending.
    ///
    /// While a question is pending it is returned again instead of drawing
    /// a new one. Returns `None` once the session is over.
    pub fn draw(&mut self) -> Option<QuizItem> {
        if self.state != SessionState::AwaitingAnswer {
            return None;
        }
        if let Some(quiz) = &self.pending {
            return Some(quiz.clone());
        }
        if self.pool.is_empty() {
            self.state = SessionState::Won;
            return None;
        }

        let index = self.rng.random_range(0..self.pool.len());
        let quiz = self.pool.swap_remove(index);
        tracing::debug!(id = quiz.id, remaining = self.pool.len(), "drew question");
        self.pending = Some(quiz.clone());
        Some(quiz)
    }

    /// Judge `reply` against the pending question.
    ///
    /// Returns `None` when nothing is pending.
    pub fn answer(&mut self, reply: &str) -> Option<Verdict> {
        let quiz = self.pending.take()?;
        let verdict = Verdict::judge(reply, &quiz.answer);
        match verdict {
            Verdict::Correct => {
                self.score += 1;
                if self.pool.is_empty() {
                    self.state = SessionState::Won;
                }
            }
            Verdict::Incorrect => self.state = SessionState::Lost,
        }
        Some(verdict)
    }

    /// The final outcome, once the session is in a terminal state.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        let score = self.score;
        match self.state {
            SessionState::Loading | SessionState::AwaitingAnswer => None,
            SessionState::Won => Some(SessionOutcome::Won { score }),
            SessionState::Lost => Some(SessionOutcome::Lost { score }),
            SessionState::Aborted => Some(SessionOutcome::Aborted {
                score,
                reason: self.abort_reason.clone().unwrap_or_default(),
            }),
        }
    }

    /// Load `items` and play them to the end.
    pub async fn start<P>(
        mut self,
        items: Vec<QuizItem>,
        prompter: &mut P,
        observer: &dyn SessionObserver,
    ) -> SessionOutcome
    where
        P: Prompter + ?Sized,
    {
        self.load(items);
        self.run(prompter, observer).await
    }

    /// Ask questions until the session reaches a terminal state.
    pub async fn run<P>(
        &mut self,
        prompter: &mut P,
        observer: &dyn SessionObserver,
    ) -> SessionOutcome
    where
        P: Prompter + ?Sized,
    {
        while let Some(quiz) = self.draw() {
            observer.on_question(&quiz, self.remaining());

            let reply = match prompter.ask(&quiz.question).await {
                Ok(reply) => reply,
                Err(e) => {
                    self.fail(e.to_string());
                    break;
                }
            };

            if let Some(verdict) = self.answer(&reply) {
                observer.on_answer(&quiz, verdict, self.score);
            }
        }

        self.finish()
    }

    fn finish(&mut self) -> SessionOutcome {
        let outcome = match self.outcome() {
            Some(outcome) => outcome,
            None => {
                self.fail("session was never loaded");
                SessionOutcome::Aborted {
                    score: self.score,
                    reason: "session was never loaded".into(),
                }
            }
        };

        if let SessionOutcome::Aborted { reason, .. } = &outcome {
            tracing::warn!(score = self.score, "session aborted: {reason}");
        } else {
            tracing::info!(score = self.score, "session {outcome}");
        }
        outcome
    }
}

/// Fetch every quiz from `store` and play one session over them.
///
/// A store failure aborts with a score of 0 before any question is asked.
pub async fn play<S, P, R>(
    store: &S,
    prompter: &mut P,
    rng: R,
    observer: &dyn SessionObserver,
) -> SessionOutcome
where
    S: QuestionStore + ?Sized,
    P: Prompter + ?Sized,
    R: Rng,
{
    let mut session = PlaySession::new(rng);
    match store.fetch_all().await {
        Ok(items) => session.load(items),
        Err(e) => {
            session.fail(format!("could not load quizzes: {e}"));
            return session.finish();
        }
    }
    session.run(prompter, observer).await
}

/// Ask a single quiz and judge the reply.
pub async fn ask_one<P>(quiz: &QuizItem, prompter: &mut P) -> Result<Verdict, PromptError>
where
    P: Prompter + ?Sized,
{
    let reply = prompter.ask(&quiz.question).await?;
    Ok(Verdict::judge(&reply, &quiz.answer))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::StoreError;
    use crate::mock::ScriptedPrompter;
    use crate::model::{NewQuiz, QuizId};

    /// Records ids and running scores as the session reports them.
    #[derive(Default)]
    struct Recorder {
        ids: Mutex<Vec<QuizId>>,
        scores: Mutex<Vec<usize>>,
        verdicts: Mutex<Vec<Verdict>>,
    }

    impl SessionObserver for Recorder {
        fn on_question(&self, quiz: &QuizItem, _remaining: usize) {
            self.ids.lock().unwrap().push(quiz.id);
        }

        fn on_answer(&self, _quiz: &QuizItem, verdict: Verdict, score: usize) {
            self.scores.lock().unwrap().push(score);
            self.verdicts.lock().unwrap().push(verdict);
        }
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn items(n: usize) -> Vec<QuizItem> {
        (0..n)
            .map(|i| QuizItem::new(i as QuizId + 1, format!("question {i}"), format!("answer {i}")))
            .collect()
    }

    fn two_items() -> Vec<QuizItem> {
        vec![
            QuizItem::new(1, "2+2?", "4"),
            QuizItem::new(2, "Capital of France?", "Paris"),
        ]
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[tokio::test]
    async fn two_correct_answers_win() {
        let items = two_items();
        let mut prompter = ScriptedPrompter::new(|q| {
            let reply = if q == "2+2?" { "4" } else { "paris" };
            Ok(reply.to_string())
        });
        let recorder = Recorder::default();

        let outcome = PlaySession::new(rng(1))
            .start(items, &mut prompter, &recorder)
            .await;

        assert_eq!(outcome, SessionOutcome::Won { score: 2 });
        assert_eq!(prompter.call_count(), 2);
        let ids = recorder.ids.lock().unwrap();
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 2);
    }

    #[tokio::test]
    async fn wrong_answer_loses() {
        let mut prompter = ScriptedPrompter::with_replies(["5"]);
        let outcome = PlaySession::new(rng(1))
            .start(vec![QuizItem::new(1, "2+2?", "4")], &mut prompter, &NoopObserver)
            .await;
        assert_eq!(outcome, SessionOutcome::Lost { score: 0 });
    }

    #[tokio::test]
    async fn empty_pool_is_vacuous_win() {
        let mut prompter = ScriptedPrompter::closed();
        let outcome = PlaySession::new(rng(1))
            .start(vec![], &mut prompter, &NoopObserver)
            .await;
        assert_eq!(outcome, SessionOutcome::Won { score: 0 });
        assert_eq!(prompter.call_count(), 0);
    }

    #[tokio::test]
    async fn prompter_failure_aborts() {
        let mut prompter = ScriptedPrompter::closed();
        let outcome = PlaySession::new(rng(1))
            .start(two_items(), &mut prompter, &NoopObserver)
            .await;
        assert_eq!(
            outcome,
            SessionOutcome::Aborted {
                score: 0,
                reason: "input closed".into()
            }
        );
        assert_eq!(prompter.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_after_correct_answers_keeps_partial_score() {
        let items = items(3);
        let mut answered = false;
        let oracle_items = items.clone();
        let mut prompter = ScriptedPrompter::new(move |q| {
            if answered {
                return Err(PromptError::Interrupted);
            }
            answered = true;
            let quiz = oracle_items.iter().find(|i| i.question == q).unwrap();
            Ok(quiz.answer.clone())
        });

        let outcome = PlaySession::new(rng(3))
            .start(items, &mut prompter, &NoopObserver)
            .await;

        assert_eq!(
            outcome,
            SessionOutcome::Aborted {
                score: 1,
                reason: "interrupted".into()
            }
        );
    }

    #[tokio::test]
    async fn answers_are_case_and_whitespace_insensitive() {
        let quiz = vec![QuizItem::new(1, "Capital of Spain?", "Madrid")];
        for reply in ["Madrid", " madrid ", "MADRID"] {
            let mut prompter = ScriptedPrompter::with_replies([reply]);
            let outcome = PlaySession::new(rng(1))
                .start(quiz.clone(), &mut prompter, &NoopObserver)
                .await;
            assert_eq!(outcome, SessionOutcome::Won { score: 1 }, "reply {reply:?}");
        }
    }

    #[test]
    fn same_seed_same_order() {
        let order = |seed| {
            let mut session = PlaySession::new(rng(seed));
            session.load(items(10));
            let mut ids = Vec::new();
            while let Some(quiz) = session.draw() {
                ids.push(quiz.id);
                let answer = quiz.answer.clone();
                session.answer(&answer);
            }
            ids
        };
        assert_eq!(order(42), order(42));
        assert_eq!(order(42).len(), 10);
    }

    #[test]
    fn step_api_transitions() {
        let mut session = PlaySession::new(rng(9));
        assert_eq!(session.state(), SessionState::Loading);
        assert!(session.draw().is_none());
        assert!(session.answer("anything").is_none());

        session.load(two_items());
        assert_eq!(session.state(), SessionState::AwaitingAnswer);
        assert_eq!(session.remaining(), 2);

        let first = session.draw().unwrap();
        assert_eq!(session.remaining(), 1);
        // drawing again re-offers the pending question
        assert_eq!(session.draw().unwrap(), first);
        assert_eq!(session.remaining(), 1);

        let answer = first.answer.clone();
        assert_eq!(session.answer(&answer), Some(Verdict::Correct));
        assert_eq!(session.state(), SessionState::AwaitingAnswer);
        assert!(session.outcome().is_none());

        let second = session.draw().unwrap();
        assert_ne!(second.id, first.id);
        let answer = second.answer.clone();
        assert_eq!(session.answer(&answer), Some(Verdict::Correct));
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.outcome(), Some(SessionOutcome::Won { score: 2 }));
        assert!(session.draw().is_none());
    }

    #[test]
    fn terminal_states_are_sticky() {
        let mut session = PlaySession::new(rng(2));
        session.load(vec![QuizItem::new(1, "2+2?", "4")]);
        session.draw();
        assert_eq!(session.answer("5"), Some(Verdict::Incorrect));
        assert_eq!(session.state(), SessionState::Lost);

        session.fail("too late");
        session.load(two_items());
        assert_eq!(session.outcome(), Some(SessionOutcome::Lost { score: 0 }));
    }

    #[tokio::test]
    async fn run_without_load_aborts() {
        let mut session = PlaySession::new(rng(1));
        let mut prompter = ScriptedPrompter::closed();
        let outcome = session.run(&mut prompter, &NoopObserver).await;
        assert!(outcome.is_aborted());
        assert_eq!(prompter.call_count(), 0);
    }

    struct FixedStore(Result<Vec<QuizItem>, ()>);

    #[async_trait]
    impl QuestionStore for FixedStore {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_all(&self) -> Result<Vec<QuizItem>, StoreError> {
            self.0
                .clone()
                .map_err(|_| StoreError::Io(std::io::Error::other("disk gone")))
        }

        async fn get(&self, id: QuizId) -> Result<QuizItem, StoreError> {
            Err(StoreError::NotFound(id))
        }

        async fn create(&self, _quiz: NewQuiz) -> Result<QuizItem, StoreError> {
            Err(StoreError::Invalid("read-only".into()))
        }

        async fn update(&self, _quiz: QuizItem) -> Result<QuizItem, StoreError> {
            Err(StoreError::Invalid("read-only".into()))
        }

        async fn delete(&self, id: QuizId) -> Result<(), StoreError> {
            Err(StoreError::NotFound(id))
        }
    }

    #[tokio::test]
    async fn play_fetches_from_store() {
        let items = two_items();
        let store = FixedStore(Ok(items.clone()));
        let mut prompter = ScriptedPrompter::oracle(&items);
        let outcome = play(&store, &mut prompter, rng(5), &NoopObserver).await;
        assert_eq!(outcome, SessionOutcome::Won { score: 2 });
    }

    #[tokio::test]
    async fn store_failure_aborts_before_prompting() {
        let store = FixedStore(Err(()));
        let mut prompter = ScriptedPrompter::closed();
        let outcome = play(&store, &mut prompter, rng(5), &NoopObserver).await;
        match outcome {
            SessionOutcome::Aborted { score, reason } => {
                assert_eq!(score, 0);
                assert!(reason.contains("disk gone"), "reason was {reason}");
            }
            other => panic!("expected abort, got {other:?}"),
        }
        assert_eq!(prompter.call_count(), 0);
    }

    #[tokio::test]
    async fn ask_one_judges_reply() {
        let quiz = QuizItem::new(1, "2+2?", "4");
        let mut prompter = ScriptedPrompter::with_replies(["4", "five"]);
        assert_eq!(ask_one(&quiz, &mut prompter).await.unwrap(), Verdict::Correct);
        assert_eq!(ask_one(&quiz, &mut prompter).await.unwrap(), Verdict::Incorrect);
        assert!(ask_one(&quiz, &mut prompter).await.is_err());
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_string(&SessionOutcome::Lost { score: 3 }).unwrap();
        assert_eq!(json, r#"{"outcome":"lost","score":3}"#);
    }

    proptest! {
        #[test]
        fn prop_oracle_always_wins(n in 0usize..40, seed: u64) {
            let items = items(n);
            let mut prompter = ScriptedPrompter::oracle(&items);
            let recorder = Recorder::default();
            let mut session = PlaySession::new(rng(seed));
            session.load(items);

            let outcome = block_on(session.run(&mut prompter, &recorder));

            prop_assert_eq!(outcome, SessionOutcome::Won { score: n });
            prop_assert_eq!(session.remaining(), 0);
            prop_assert_eq!(prompter.call_count(), n);
        }

        #[test]
        fn prop_wrong_first_answer_loses(n in 1usize..40, seed: u64) {
            let mut prompter = ScriptedPrompter::with_replies(["definitely wrong"]);
            let outcome = block_on(
                PlaySession::new(rng(seed)).start(items(n), &mut prompter, &NoopObserver),
            );
            prop_assert_eq!(outcome, SessionOutcome::Lost { score: 0 });
            prop_assert_eq!(prompter.call_count(), 1);
        }

        #[test]
        fn prop_no_repeats_and_bounded_prompts(
            n in 0usize..40,
            correct in 0usize..50,
            seed: u64
        ) {
            let items = items(n);
            let lookup = items.clone();
            let mut given = 0usize;
            let mut prompter = ScriptedPrompter::new(move |q| {
                given += 1;
                if given > correct {
                    return Ok("nope".to_string());
                }
                Ok(lookup
                    .iter()
                    .find(|i| i.question == q)
                    .map(|i| i.answer.clone())
                    .unwrap_or_default())
            });
            let recorder = Recorder::default();

            let outcome = block_on(
                PlaySession::new(rng(seed)).start(items, &mut prompter, &recorder),
            );

            let ids = recorder.ids.lock().unwrap().clone();
            let unique: HashSet<_> = ids.iter().copied().collect();
            prop_assert!(ids.len() <= n);
            prop_assert_eq!(unique.len(), ids.len());

            let scores = recorder.scores.lock().unwrap().clone();
            prop_assert!(scores.windows(2).all(|w| w[0] <= w[1]));

            let verdicts = recorder.verdicts.lock().unwrap().clone();
            let correct_count = verdicts.iter().filter(|v| v.is_correct()).count();
            prop_assert_eq!(outcome.score(), correct_count);
            prop_assert_eq!(outcome.score(), correct.min(n));
        }
    }
}
