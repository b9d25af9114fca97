use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormViewState;
use crate::ui::mvi::Reducer;

/// Reducer for the form view.
///
/// Editing and focus intents are ignored while the summary modal is
/// open; the modal is the blocking confirmation of an accepted submit.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormViewState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Input { ch } => {
                if state.modal_open() {
                    return state;
                }
                if let Some(field) = state.fields.get_mut(state.focused) {
                    field.value.push(ch);
                    field.dirty = true;
                }
                state
            }

            FormIntent::Backspace => {
                if state.modal_open() {
                    return state;
                }
                if let Some(field) = state.fields.get_mut(state.focused) {
                    field.value.pop();
                    field.dirty = true;
                }
                state
            }

            FormIntent::FocusNext => {
                if state.modal_open() {
                    return state;
                }
                if let Some(field) = state.fields.get_mut(state.focused) {
                    field.touched = true;
                }
                if !state.fields.is_empty() {
                    state.focused = (state.focused + 1) % state.fields.len();
                }
                state
            }

            FormIntent::FocusPrev => {
                if state.modal_open() {
                    return state;
                }
                if let Some(field) = state.fields.get_mut(state.focused) {
                    field.touched = true;
                }
                if !state.fields.is_empty() {
                    state.focused = if state.focused == 0 {
                        state.fields.len() - 1
                    } else {
                        state.focused - 1
                    };
                }
                state
            }

            FormIntent::Validated { errors } => {
                state.validated = true;
                for (field, error) in state.fields.iter_mut().zip(errors) {
                    field.error = error;
                }
                state
            }

            FormIntent::Accepted { values } => {
                state.validated = true;
                for field in &mut state.fields {
                    field.error = None;
                }
                state.submissions += 1;
                state.submitted = Some(values);
                state
            }

            FormIntent::DismissSubmitted => {
                state.submitted = None;
                state
            }
        }
    }
}
