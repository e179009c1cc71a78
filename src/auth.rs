use serde::{Deserialize, Serialize};

/// Failed-login counter backing the admin sign-in form.
///
/// Serializable so the browser can persist it in local storage across
/// reloads; the server never sees it. The actual credential check lives
/// behind a server function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginLockout {
    max_attempts: u32,
    failed: u32,
}

impl LoginLockout {
    /// A budget of 0 attempts would lock the form forever; clamp to 1.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            failed: 0,
        }
    }

    /// Record one failed attempt. Returns true once the form is locked.
    pub fn record_failure(&mut self) -> bool {
        self.failed = self.failed.saturating_add(1);
        self.is_locked()
    }

    pub fn is_locked(&self) -> bool {
        self.failed >= self.max_attempts
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.failed)
    }

    /// Clear the counter after a successful sign-in.
    pub fn reset(&mut self) {
        self.failed = 0;
    }
}

impl Default for LoginLockout {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locks_only_after_budget_is_spent() {
        let mut lockout = LoginLockout::new(3);
        assert!(!lockout.record_failure());
        assert!(!lockout.record_failure());
        assert_eq!(lockout.attempts_remaining(), 1);
        assert!(!lockout.is_locked());

        assert!(lockout.record_failure());
        assert!(lockout.is_locked());
        assert_eq!(lockout.attempts_remaining(), 0);
    }

    #[test]
    fn reset_restores_the_budget() {
        let mut lockout = LoginLockout::new(2);
        lockout.record_failure();
        lockout.record_failure();
        assert!(lockout.is_locked());

        lockout.reset();
        assert!(!lockout.is_locked());
        assert_eq!(lockout.attempts_remaining(), 2);
    }

    #[test]
    fn failures_past_the_budget_stay_locked() {
        let mut lockout = LoginLockout::new(1);
        assert!(lockout.record_failure());
        assert!(lockout.record_failure());
        assert!(lockout.is_locked());
        assert_eq!(lockout.attempts_remaining(), 0);
    }

    #[test]
    fn zero_budget_clamps_to_one() {
        let mut lockout = LoginLockout::new(0);
        assert_eq!(lockout.attempts_remaining(), 1);
        assert!(!lockout.is_locked());
        assert!(lockout.record_failure());
    }

    #[test]
    fn survives_a_serde_round_trip() {
        let mut lockout = LoginLockout::new(3);
        lockout.record_failure();
        let json = serde_json::to_string(&lockout).unwrap();
        let restored: LoginLockout = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, lockout);
        assert_eq!(restored.attempts_remaining(), 2);
    }
}
