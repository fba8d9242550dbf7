//! Initialization outcome detection
//!
//! The backend announces the end of initialization with one of two fixed
//! phrases in its log. [`InitDetector`] watches the init page's stream for
//! them and turns the first match into a short timed sequence:
//!
//! ```text
//! ready:   line ──prompt_delay──▶ success prompt ──redirect_delay──▶ dashboard
//! failure: line ──prompt_delay──▶ error prompt + init trigger re-enabled
//! ```
//!
//! Time never passes on its own here: callers pass `now` to
//! [`on_log`](InitDetector::on_log) and [`poll`](InitDetector::poll).

use std::time::{Duration, Instant};

use igpanel_core::InitState;

/// Emitted by the backend when every account is ready
pub const READY_PHRASE: &str = "Приложение готово к работе";

/// Emitted by the backend when initialization cannot complete
pub const FAILURE_PHRASE: &str = "Приложение НЕ может работать";

/// UI side effects requested by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitEffect {
    ShowSuccessPrompt,
    NavigateToDashboard,
    ShowFailurePrompt,
    EnableInitTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    SuccessPrompt,
    Redirect,
    FailurePrompt,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Instant,
    step: Step,
}

#[derive(Debug, Clone)]
pub struct InitDetector {
    state: InitState,
    next: Option<Scheduled>,
    prompt_delay: Duration,
    redirect_delay: Duration,
}

impl InitDetector {
    pub fn new(prompt_delay: Duration, redirect_delay: Duration) -> Self {
        Self {
            state: InitState::Pending,
            next: None,
            prompt_delay,
            redirect_delay,
        }
    }

    pub fn state(&self) -> InitState {
        self.state
    }

    /// When the next timed step is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next.map(|s| s.due)
    }

    /// Terminal and nothing left to run
    pub fn is_settled(&self) -> bool {
        self.state.is_terminal() && self.next.is_none()
    }

    /// Inspect a log line. Returns true if it ended initialization.
    ///
    /// No-op once a terminal state has been reached.
    pub fn on_log(&mut self, line: &str, now: Instant) -> bool {
        if self.state.is_terminal() {
            return false;
        }

        let outcome = match (line.find(READY_PHRASE), line.find(FAILURE_PHRASE)) {
            (Some(ready), Some(failure)) if failure < ready => InitState::Failed,
            (Some(_), _) => InitState::Succeeded,
            (None, Some(_)) => InitState::Failed,
            (None, None) => return false,
        };

        self.state = outcome;
        let step = match outcome {
            InitState::Succeeded => Step::SuccessPrompt,
            _ => Step::FailurePrompt,
        };
        self.next = Some(Scheduled {
            due: now + self.prompt_delay,
            step,
        });
        true
    }

    /// Run every step that is due at `now`, in order
    pub fn poll(&mut self, now: Instant) -> Vec<InitEffect> {
        let mut effects = Vec::new();

        while let Some(scheduled) = self.next.filter(|s| s.due <= now) {
            self.next = None;
            match scheduled.step {
                Step::SuccessPrompt => {
                    effects.push(InitEffect::ShowSuccessPrompt);
                    self.next = Some(Scheduled {
                        due: scheduled.due + self.redirect_delay,
                        step: Step::Redirect,
                    });
                }
                Step::Redirect => effects.push(InitEffect::NavigateToDashboard),
                Step::FailurePrompt => {
                    effects.push(InitEffect::ShowFailurePrompt);
                    effects.push(InitEffect::EnableInitTrigger);
                }
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const READY_LINE: &str = "[SYSTEM] [INIT] [SUCCESS] Приложение готово к работе";
    const FAILURE_LINE: &str =
        "[SYSTEM] [INIT] [ERROR] Приложение НЕ может работать. Исправьте ошибки и перезапустите.";

    fn detector() -> InitDetector {
        InitDetector::new(Duration::from_millis(1000), Duration::from_millis(2000))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_unrelated_lines_keep_pending() {
        let mut d = detector();
        let t0 = Instant::now();
        assert!(!d.on_log("[SYSTEM] [INIT] [INFO] starting", t0));
        assert!(!d.on_log("[alice] [LOGIN] [SUCCESS] logged in", t0));
        assert_eq!(d.state(), InitState::Pending);
        assert!(d.poll(t0 + ms(10_000)).is_empty());
    }

    #[test]
    fn test_ready_sequence() {
        let mut d = detector();
        let t0 = Instant::now();
        assert!(d.on_log(READY_LINE, t0));
        assert_eq!(d.state(), InitState::Succeeded);

        assert!(d.poll(t0 + ms(999)).is_empty());
        assert_eq!(d.poll(t0 + ms(1000)), vec![InitEffect::ShowSuccessPrompt]);
        assert!(d.poll(t0 + ms(2999)).is_empty());
        assert_eq!(
            d.poll(t0 + ms(3000)),
            vec![InitEffect::NavigateToDashboard]
        );
        assert!(d.is_settled());
        assert!(d.poll(t0 + ms(60_000)).is_empty());
    }

    #[test]
    fn test_late_poll_runs_all_due_steps_in_order() {
        let mut d = detector();
        let t0 = Instant::now();
        d.on_log(READY_LINE, t0);
        assert_eq!(
            d.poll(t0 + ms(5000)),
            vec![
                InitEffect::ShowSuccessPrompt,
                InitEffect::NavigateToDashboard
            ]
        );
    }

    #[test]
    fn test_failure_sequence() {
        let mut d = detector();
        let t0 = Instant::now();
        assert!(d.on_log(FAILURE_LINE, t0));
        assert_eq!(d.state(), InitState::Failed);
        assert_eq!(
            d.poll(t0 + ms(1000)),
            vec![InitEffect::ShowFailurePrompt, InitEffect::EnableInitTrigger]
        );
        assert!(d.is_settled());
    }

    #[test]
    fn test_transitions_at_most_once() {
        let mut d = detector();
        let t0 = Instant::now();
        assert!(d.on_log(READY_LINE, t0));
        assert!(!d.on_log(FAILURE_LINE, t0 + ms(10)));
        assert!(!d.on_log(READY_LINE, t0 + ms(20)));
        assert_eq!(d.state(), InitState::Succeeded);

        let effects = d.poll(t0 + ms(10_000));
        assert_eq!(
            effects
                .iter()
                .filter(|e| **e == InitEffect::NavigateToDashboard)
                .count(),
            1
        );
        assert!(!effects.contains(&InitEffect::ShowFailurePrompt));
    }

    #[test]
    fn test_failure_first_wins() {
        let mut d = detector();
        let t0 = Instant::now();
        d.on_log(FAILURE_LINE, t0);
        d.on_log(READY_LINE, t0);
        assert_eq!(d.state(), InitState::Failed);
    }

    #[test]
    fn test_both_phrases_in_one_line_earliest_wins() {
        let t0 = Instant::now();

        let mut d = detector();
        d.on_log(&format!("{FAILURE_PHRASE} / {READY_PHRASE}"), t0);
        assert_eq!(d.state(), InitState::Failed);

        let mut d = detector();
        d.on_log(&format!("{READY_PHRASE} / {FAILURE_PHRASE}"), t0);
        assert_eq!(d.state(), InitState::Succeeded);
    }

    #[test]
    fn test_next_deadline() {
        let mut d = detector();
        let t0 = Instant::now();
        assert_eq!(d.next_deadline(), None);
        d.on_log(READY_LINE, t0);
        assert_eq!(d.next_deadline(), Some(t0 + ms(1000)));
        d.poll(t0 + ms(1000));
        assert_eq!(d.next_deadline(), Some(t0 + ms(3000)));
    }
}
