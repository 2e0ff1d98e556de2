//! Form fields and the values collected for one prompt

use super::{Temperature, Tone};
use crate::constants::OBJECTIVE_PLACEHOLDER;

/// Text fields of the form, in the order they appear in a compiled prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Objective,
    Persona,
    SenderName,
    ReceiverName,
    Context,
    WordCount,
    OtherConstraints,
    Audience,
    ExtraDetails,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::Objective,
        FieldId::Persona,
        FieldId::SenderName,
        FieldId::ReceiverName,
        FieldId::Context,
        FieldId::WordCount,
        FieldId::OtherConstraints,
        FieldId::Audience,
        FieldId::ExtraDetails,
    ];

    /// Label written in front of the value in the compiled prompt
    pub fn label(self) -> &'static str {
        match self {
            Self::Objective => "Objective",
            Self::Persona => "Persona",
            Self::SenderName => "Sender's Name",
            Self::ReceiverName => "Receiver's Name",
            Self::Context => "Context of Email",
            Self::WordCount => "Number of Words",
            Self::OtherConstraints => "Other Constraints",
            Self::Audience => "Audience",
            Self::ExtraDetails => "Extra Details",
        }
    }

    /// Guidance shown under the form while the field has focus
    pub fn hint(self) -> &'static str {
        match self {
            Self::Objective => {
                "Required. The clearer and more detailed the objective, the better the email."
            }
            Self::Persona => {
                "E.g. CEO, CTO, Marketer, Account executive, Sales Representative, Engineer, HR"
            }
            Self::SenderName => "Name used to sign the email",
            Self::ReceiverName => "Name used to greet the recipient",
            Self::Context => "E.g. previous conversation, follow up",
            Self::WordCount => "Approximate length of the email",
            Self::OtherConstraints => "E.g. add a relevant quote or wise saying",
            Self::Audience => "Job position, education level (graduate, 5th grade, ...)",
            Self::ExtraDetails => "E.g. industry, readers' strengths and weaknesses",
        }
    }

    /// Value the form is pre-filled with
    pub fn form_default(self) -> &'static str {
        match self {
            Self::Objective => OBJECTIVE_PLACEHOLDER,
            Self::SenderName => "[SENDERS NAME]",
            Self::ReceiverName => "[RECEIVER NAME]",
            Self::WordCount => "75 to 100",
            _ => "",
        }
    }
}

/// Values collected by the form for one prompt-generation attempt
///
/// `Default` leaves the objective at its placeholder and every optional field
/// empty; [`FieldSet::form_defaults`] reproduces what the form shows on start.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    pub objective: String,
    pub persona: String,
    pub sender_name: String,
    pub receiver_name: String,
    pub context: String,
    pub word_count: String,
    pub other_constraints: String,
    pub audience: String,
    pub extra_details: String,
    pub tone: Tone,
    pub temperature: Temperature,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            objective: OBJECTIVE_PLACEHOLDER.to_string(),
            persona: String::new(),
            sender_name: String::new(),
            receiver_name: String::new(),
            context: String::new(),
            word_count: String::new(),
            other_constraints: String::new(),
            audience: String::new(),
            extra_details: String::new(),
            tone: Tone::default(),
            temperature: Temperature::default(),
        }
    }
}

impl FieldSet {
    /// Field set pre-filled the way the form presents it
    pub fn form_defaults(tone: Tone, temperature: Temperature) -> Self {
        let mut fields = Self {
            tone,
            temperature,
            ..Self::default()
        };
        for id in FieldId::ALL {
            *fields.get_mut(id) = id.form_default().to_string();
        }
        fields
    }

    /// Field set with the given objective and nothing else filled in
    #[cfg(test)]
    pub fn with_objective(objective: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::Objective => &self.objective,
            FieldId::Persona => &self.persona,
            FieldId::SenderName => &self.sender_name,
            FieldId::ReceiverName => &self.receiver_name,
            FieldId::Context => &self.context,
            FieldId::WordCount => &self.word_count,
            FieldId::OtherConstraints => &self.other_constraints,
            FieldId::Audience => &self.audience,
            FieldId::ExtraDetails => &self.extra_details,
        }
    }

    pub fn get_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::Objective => &mut self.objective,
            FieldId::Persona => &mut self.persona,
            FieldId::SenderName => &mut self.sender_name,
            FieldId::ReceiverName => &mut self.receiver_name,
            FieldId::Context => &mut self.context,
            FieldId::WordCount => &mut self.word_count,
            FieldId::OtherConstraints => &mut self.other_constraints,
            FieldId::Audience => &mut self.audience,
            FieldId::ExtraDetails => &mut self.extra_details,
        }
    }

    /// Builder-style setter
    #[cfg(test)]
    pub fn set(mut self, id: FieldId, value: impl Into<String>) -> Self {
        *self.get_mut(id) = value.into();
        self
    }
}
