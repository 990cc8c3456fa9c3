// 📝 Form State - the three text fields behind the table
// Selection changes push a record's values in; operations clear it out.

use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Surname,
    Age,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Surname,
            Field::Surname => Field::Age,
            Field::Age => Field::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Name => Field::Age,
            Field::Surname => Field::Name,
            Field::Age => Field::Surname,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::Age => "Age",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub surname: String,
    pub age: String,
    pub focus: Field,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        FormState {
            name: String::new(),
            surname: String::new(),
            age: String::new(),
            focus: Field::Name,
        }
    }

    /// Selection changed: show the selected record in the fields
    pub fn fill_from(&mut self, record: &Record) {
        self.name = record.name.clone();
        self.surname = record.surname.clone();
        self.age = record.age.to_string();
    }

    /// Empty every field and go back to the first one
    pub fn clear(&mut self) {
        self.name.clear();
        self.surname.clear();
        self.age.clear();
        self.focus = Field::Name;
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::Age => &self.age,
        }
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Surname => &mut self.surname,
            Field::Age => &mut self.age,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}
