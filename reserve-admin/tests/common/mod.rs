//! Test doubles shared by the workflow tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use reserve_admin::core::{Confirm, Notification, Notifier};
use reserve_client::InMemoryApi;
use shared::models::{Customer, Table, TimeSlot};

/// Keeps every notification
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.all().into_iter().map(|n| n.description).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// Answers prompts from a script; declines once the script runs out
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

/// Backend with customer 1, table 1 and slot 1 (`14:30:00`)
pub fn seeded_api() -> Arc<InMemoryApi> {
    let api = Arc::new(InMemoryApi::new());
    api.seed(Customer::new("Ada", "555-0100", "ada@example.com"))
        .unwrap();
    api.seed(Table::new("T-1", 4)).unwrap();
    api.seed(TimeSlot::new("A1", "14:30:00")).unwrap();
    api
}

pub struct Harness {
    pub api: Arc<InMemoryApi>,
    pub notifier: Arc<RecordingNotifier>,
    pub confirm: Arc<ScriptedConfirm>,
}

impl Harness {
    pub fn new(api: Arc<InMemoryApi>, answers: &[bool]) -> Self {
        Self {
            api,
            notifier: Arc::new(RecordingNotifier::default()),
            confirm: Arc::new(ScriptedConfirm::answering(answers)),
        }
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }

    pub fn confirm(&self) -> Arc<dyn Confirm> {
        self.confirm.clone()
    }
}
