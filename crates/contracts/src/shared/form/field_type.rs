//! Input kinds for form fields

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Url,
    Phone,
    TextArea,
    Number,
    Date,
    Time,
    Checkbox,
    /// Closed set of string options
    Select(&'static [&'static str]),
    /// Growable ordered sequence of single-line entries
    List,
}

impl FieldKind {
    /// Value of the HTML `type` attribute for single `<input>` kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Phone => "tel",
            Self::Number => "number",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            _ => "text",
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Checkbox)
    }
}
