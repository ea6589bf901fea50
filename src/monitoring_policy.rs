// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The monitoring policy being edited by the monitoring policies view.

/// A monitoring policy, as edited in the view.  All fields start empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitoringPolicy {
    pub id: String,
    pub name: String,
    pub tags: String,
    pub rules: String,
}

/// Holds the monitoring policy shown by the monitoring policies view.
#[derive(Clone, Debug, Default)]
pub struct MonitoringPolicyState {
    policy: MonitoringPolicy,
}

impl MonitoringPolicyState {
    /// Creates a state holding an empty policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(&self) -> &MonitoringPolicy {
        &self.policy
    }

    /// Returns the policy for in-place editing.
    pub fn policy_mut(&mut self) -> &mut MonitoringPolicy {
        &mut self.policy
    }

    pub fn set_policy(&mut self, policy: MonitoringPolicy) {
        self.policy = policy;
    }

    /// Replaces the policy with an empty one.
    pub fn reset(&mut self) {
        self.policy = MonitoringPolicy::default();
    }
}
