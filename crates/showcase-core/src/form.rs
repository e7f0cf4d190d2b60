//! Contact form validation and submit loading state.
//!
//! Field values stay with the host; the form only tracks what each field
//! last validated to and whether a submission is in flight.

use heapless::Vec;
use log::debug;

use crate::{
    TickResult,
    error::{CapacityError, SubmitError},
    render::{FieldStatus, FieldView, FormView},
};

pub use crate::error::FieldError;

pub const MAX_FIELDS: usize = 16;

/// Shortest value a phone field accepts, in characters.
pub const MIN_PHONE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormField<'a> {
    pub name: &'a str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField<'_> {
    /// Checks `value` after trimming surrounding whitespace.
    ///
    /// Type rules only apply to non-empty values, so an empty optional field
    /// is always valid.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }

        match self.kind {
            FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
            FieldKind::Tel if value.chars().count() < MIN_PHONE_CHARS => {
                Err(FieldError::InvalidPhone)
            }
            _ => Ok(()),
        }
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

pub struct ContactForm<'a> {
    fields: &'a [FormField<'a>],
    statuses: Vec<FieldStatus, MAX_FIELDS>,
    submitting: bool,
    pending_redraw: bool,
}

impl<'a> ContactForm<'a> {
    pub fn new(fields: &'a [FormField<'a>]) -> Result<Self, CapacityError> {
        let mut statuses = Vec::new();
        statuses
            .resize(fields.len(), FieldStatus::Neutral)
            .map_err(|_| CapacityError {
                requested: fields.len(),
                capacity: MAX_FIELDS,
            })?;

        Ok(Self {
            fields,
            statuses,
            submitting: false,
            pending_redraw: true,
        })
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn status(&self, index: usize) -> Option<FieldStatus> {
        self.statuses.get(index).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates one field, as on blur, and records the result.
    ///
    /// Returns `None` for an unknown field index.
    pub fn validate_field(&mut self, index: usize, value: &str) -> Option<Result<(), FieldError>> {
        let field = self.fields.get(index)?;
        let result = field.validate(value);
        let status = match result {
            Err(err) => FieldStatus::Invalid(err),
            Ok(()) if value.trim().is_empty() => FieldStatus::Neutral,
            Ok(()) => FieldStatus::Valid,
        };

        if let Some(slot) = self.statuses.get_mut(index)
            && *slot != status
        {
            *slot = status;
            self.pending_redraw = true;
        }
        Some(result)
    }

    /// Validates every field and, when all pass, enters the loading state.
    ///
    /// `values` lines up with the field list; missing trailing values count
    /// as empty.
    pub fn submit(&mut self, values: &[&str]) -> Result<(), SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        let mut invalid = 0;
        for index in 0..self.fields.len() {
            let value = values.get(index).copied().unwrap_or("");
            if matches!(self.validate_field(index, value), Some(Err(_))) {
                invalid += 1;
            }
        }
        if invalid > 0 {
            debug!("form: submit blocked, {} invalid field(s)", invalid);
            return Err(SubmitError::Invalid { invalid });
        }

        self.submitting = true;
        self.pending_redraw = true;
        debug!("form: submitting");
        Ok(())
    }

    /// Leaves the loading state. A successful submission also clears every
    /// field's validation marker, since the host resets the values.
    ///
    /// Returns `false` when nothing was in flight.
    pub fn finish_submit(&mut self, succeeded: bool) -> bool {
        if !self.submitting {
            return false;
        }
        self.submitting = false;
        if succeeded {
            self.clear_validation();
        }
        self.pending_redraw = true;

        debug!("form: submission finished (succeeded={})", succeeded);
        true
    }

    pub fn clear_validation(&mut self) {
        for status in self.statuses.iter_mut() {
            *status = FieldStatus::Neutral;
        }
        self.pending_redraw = true;
    }

    pub fn tick(&mut self) -> TickResult {
        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_view<F>(&self, f: F)
    where
        F: FnOnce(FormView<'_>),
    {
        let mut fields = [FieldView::default(); MAX_FIELDS];
        for (slot, (field, status)) in fields
            .iter_mut()
            .zip(self.fields.iter().zip(self.statuses.iter()))
        {
            *slot = FieldView {
                name: field.name,
                status: *status,
            };
        }

        f(FormView {
            fields: &fields[..self.statuses.len()],
            submitting: self.submitting,
        });
    }
}
