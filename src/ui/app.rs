use std::sync::mpsc;

use crate::config::Config;
use crate::form::{FieldError, FormSchema, FormValues};
use crate::query::{spawn_fetch, CacheSlot, QueryCache, QueryClient, QueryKey, QueryOutcome};
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormReducer, FormViewState};
use crate::ui::mvi::Reducer;
use crate::ui::query::{QueryIntent, QueryReducer, QueryViewState};

/// The two top-level views.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Form,
    Query,
}

/// Invoked with the collected values when a submit passes validation.
pub type SubmitHook = Box<dyn Fn(&FormValues) + Send>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    /// Declared field rules; validation outcomes flow into the reducer
    /// as intents.
    schema: FormSchema,
    form: FormViewState,
    query: QueryViewState,
    query_cache: QueryCache,
    query_key: QueryKey,
    /// HTTP client (resource, managed outside MVI). Absent until the
    /// runtime attaches it.
    query_client: Option<QueryClient>,
    events_tx: Option<mpsc::Sender<AppEvent>>,
    on_submit: Option<SubmitHook>,
}

impl App {
    pub fn new(config: &Config, initial: Screen) -> Self {
        let schema = FormSchema::contact();
        let form = FormViewState::from_schema(&schema);
        Self {
            should_quit: false,
            screen: initial,
            schema,
            form,
            query: QueryViewState::default(),
            query_cache: QueryCache::new(),
            query_key: QueryKey::new(config.query.cache_key.clone()),
            query_client: None,
            events_tx: None,
            on_submit: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Toggles between the two views. Entering the query view mounts it.
    pub fn switch_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Form => Screen::Query,
            Screen::Query => Screen::Form,
        };
        if self.screen == Screen::Query {
            self.ensure_query();
        }
    }

    /// Mounts the initial view. Called once by the runtime after wiring.
    pub fn on_mount(&mut self) {
        if self.screen == Screen::Query {
            self.ensure_query();
        }
    }

    pub fn attach_query_client(&mut self, client: QueryClient, events: mpsc::Sender<AppEvent>) {
        self.query_client = Some(client);
        self.events_tx = Some(events);
    }

    pub fn set_submit_hook(&mut self, hook: SubmitHook) {
        self.on_submit = Some(hook);
    }

    pub fn on_tick(&mut self) {}

    // -- Form view ----------------------------------------------------------

    pub fn form(&self) -> &FormViewState {
        &self.form
    }

    pub fn form_input(&mut self, ch: char) {
        self.dispatch_form(FormIntent::Input { ch });
        self.revalidate_after_edit();
    }

    pub fn form_backspace(&mut self) {
        self.dispatch_form(FormIntent::Backspace);
        self.revalidate_after_edit();
    }

    pub fn form_focus_next(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn form_focus_prev(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    /// Validates all fields and either accepts the submission (invoking
    /// the submit hook with the collected values) or surfaces one error
    /// per failing field.
    pub fn submit_form(&mut self) {
        if self.form.modal_open() {
            return;
        }

        let errors = self.validate_fields();
        if errors.iter().any(Option::is_some) {
            tracing::debug!("form submit blocked by validation");
            self.dispatch_form(FormIntent::Validated { errors });
            return;
        }

        let values = self.form.values();
        self.dispatch_form(FormIntent::Accepted {
            values: values.clone(),
        });
        if let Some(hook) = &self.on_submit {
            hook(&values);
        }
    }

    pub fn dismiss_submitted(&mut self) {
        self.dispatch_form(FormIntent::DismissSubmitted);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn validate_fields(&self) -> Vec<Option<FieldError>> {
        self.schema
            .specs()
            .iter()
            .map(|spec| spec.validate(self.form.value_of(spec.id)))
            .collect()
    }

    /// After the first submit attempt, every edit re-runs validation so
    /// errors clear (or appear) on the keystroke that changes the verdict.
    fn revalidate_after_edit(&mut self) {
        if !self.form.validated || self.form.modal_open() {
            return;
        }
        let errors = self.validate_fields();
        self.dispatch_form(FormIntent::Validated { errors });
    }

    // -- Query view ---------------------------------------------------------

    pub fn query_view(&self) -> &QueryViewState {
        &self.query
    }

    pub fn query_cache(&self) -> &QueryCache {
        &self.query_cache
    }

    pub fn query_key(&self) -> &QueryKey {
        &self.query_key
    }

    /// Mounts the query view: replay a settled outcome from the cache,
    /// attach to an in-flight fetch, or claim and spawn the first fetch.
    fn ensure_query(&mut self) {
        let slot = self.query_cache.get(&self.query_key).cloned();
        match slot {
            Some(CacheSlot::Settled(outcome)) => {
                self.dispatch_query(QueryIntent::Settled { outcome });
            }
            Some(CacheSlot::InFlight) => {}
            None => {
                let Some(client) = self.query_client.clone() else {
                    return;
                };
                let Some(events) = self.events_tx.clone() else {
                    return;
                };
                if self.query_cache.begin(&self.query_key) {
                    spawn_fetch(client, self.query_key.clone(), events);
                }
            }
        }
    }

    /// Applies a settlement from the fetch worker. Outcomes for other
    /// keys are ignored.
    pub fn on_query_settled(&mut self, key: QueryKey, outcome: QueryOutcome) {
        if key != self.query_key {
            tracing::debug!(key = key.as_str(), "ignoring settlement for unknown key");
            return;
        }
        self.query_cache.settle(&key, outcome.clone());
        self.dispatch_query(QueryIntent::Settled { outcome });
    }

    pub fn dispatch_query(&mut self, intent: QueryIntent) {
        dispatch_mvi!(self, query, QueryReducer, intent);
    }
}
