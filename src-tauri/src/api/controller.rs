use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    err::{Action, CustomError, ValidationError},
    store::RecordStore,
    student::{Gender, SearchField, Student, StudentRecord},
    validator,
};

/// 表单中的输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    RollNo,
    Name,
    FatherName,
    MotherName,
    Email,
    Gender,
    Contact,
    Dob,
    Session,
    Course,
    Address,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::RollNo,
        FormField::Name,
        FormField::FatherName,
        FormField::MotherName,
        FormField::Email,
        FormField::Gender,
        FormField::Contact,
        FormField::Dob,
        FormField::Session,
        FormField::Course,
        FormField::Address,
    ];

    /// whether `candidate` may become the new content of this input
    fn accepts(&self, candidate: &str) -> bool {
        match self {
            FormField::RollNo => validator::validate_roll_no(candidate),
            FormField::Name | FormField::FatherName | FormField::MotherName => {
                validator::validate_name(candidate)
            }
            FormField::Contact => validator::validate_contact(candidate),
            // readonly combobox
            FormField::Gender => candidate.is_empty() || candidate.parse::<Gender>().is_ok(),
            FormField::Email
            | FormField::Dob
            | FormField::Session
            | FormField::Course
            | FormField::Address => true,
        }
    }
}

/// 表单当前内容, 与输入框中的文本一致
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub roll_no: String,
    pub name: String,
    pub father_name: String,
    pub mother_name: String,
    pub email: String,
    pub gender: String,
    pub contact: String,
    pub dob: String,
    pub session: String,
    pub course: String,
    pub address: String,
}

impl StudentForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            roll_no: student.roll_no.clone(),
            name: student.name.clone(),
            father_name: student.father_name.clone(),
            mother_name: student.mother_name.clone(),
            email: student.email.clone(),
            gender: student.gender.to_string(),
            contact: student.contact.clone(),
            dob: validator::format_dob(student.dob),
            session: student.session.clone(),
            course: student.course.clone(),
            address: student.address.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::RollNo => &self.roll_no,
            FormField::Name => &self.name,
            FormField::FatherName => &self.father_name,
            FormField::MotherName => &self.mother_name,
            FormField::Email => &self.email,
            FormField::Gender => &self.gender,
            FormField::Contact => &self.contact,
            FormField::Dob => &self.dob,
            FormField::Session => &self.session,
            FormField::Course => &self.course,
            FormField::Address => &self.address,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::RollNo => &mut self.roll_no,
            FormField::Name => &mut self.name,
            FormField::FatherName => &mut self.father_name,
            FormField::MotherName => &mut self.mother_name,
            FormField::Email => &mut self.email,
            FormField::Gender => &mut self.gender,
            FormField::Contact => &mut self.contact,
            FormField::Dob => &mut self.dob,
            FormField::Session => &mut self.session,
            FormField::Course => &mut self.course,
            FormField::Address => &mut self.address,
        }
    }

    /// build a student from the form, checking that every field is filled in
    ///
    /// The email format is only checked when `check_email` is set; adding a
    /// student checks it, updating one doesn't.
    fn to_student(&self, check_email: bool) -> Result<Student, ValidationError> {
        let address = self.address.trim();
        let missing = FormField::ALL
            .into_iter()
            .filter(|f| *f != FormField::Address)
            .any(|f| self.get(f).is_empty())
            || address.is_empty();
        if missing {
            return Err(ValidationError::MissingFields);
        }

        if check_email && !validator::validate_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|_| ValidationError::MissingFields)?;
        let dob = validator::parse_dob(&self.dob)?;

        Ok(Student {
            roll_no: self.roll_no.clone(),
            name: self.name.clone(),
            father_name: self.father_name.clone(),
            mother_name: self.mother_name.clone(),
            email: self.email.clone(),
            gender,
            contact: self.contact.clone(),
            dob,
            session: self.session.clone(),
            course: self.course.clone(),
            address: address.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    Success,
    Info,
}

/// 操作完成后展示给用户的提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success",
            message: message.to_string(),
        }
    }

    fn info(title: &'static str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            title,
            message: message.to_string(),
        }
    }
}

pub type Outcome = Result<Option<Notice>, CustomError>;

/// Drives the student form: owns the records, the inputs, the rows on
/// display and which of those rows are selected.
///
/// Rows shown after a search are a subset of the store, so every displayed
/// row remembers the store position it came from. Selection is kept in
/// display rows and resolved through that mapping.
#[derive(Debug, Default)]
pub struct FormController {
    store: RecordStore,
    form: StudentForm,
    // store position of each displayed row
    view: Vec<usize>,
    // selected display rows, sorted
    selection: Vec<usize>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &StudentForm {
        &self.form
    }

    pub fn field(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// the records currently on display, in row order
    pub fn rows(&self) -> Vec<&StudentRecord> {
        self.view
            .iter()
            .filter_map(|&position| self.store.get(position))
            .collect()
    }

    /// offer new content for an input; rejected content leaves the input as it was
    pub fn set_field(&mut self, field: FormField, candidate: &str) -> bool {
        if !field.accepts(candidate) {
            debug!("rejected {:?} input {:?}", field, candidate);
            return false;
        }
        *self.form.slot(field) = candidate.to_string();
        true
    }

    pub fn add(&mut self) -> Outcome {
        let student = self.form.to_student(true)?;
        self.store.add(student)?;
        self.refresh();
        self.clear();
        Ok(Some(Notice::success("Student added successfully")))
    }

    /// select display rows and fill the form from the first of them
    pub fn select(&mut self, rows: &[usize]) -> Outcome {
        let rows: BTreeSet<usize> = rows.iter().copied().collect();
        if let Some(&row) = rows.iter().find(|&&row| row >= self.view.len()) {
            return Err(CustomError::Index {
                index: row,
                len: self.view.len(),
            });
        }

        self.selection = rows.into_iter().collect();
        if let Some(&first) = self.selection.first() {
            let position = self.view[first];
            if let Some(record) = self.store.get(position) {
                self.form = StudentForm::from_student(&record.student);
            }
        }
        Ok(None)
    }

    pub fn update(&mut self) -> Outcome {
        let position = self
            .selected_positions()
            .first()
            .copied()
            .ok_or(CustomError::Selection(Action::Update))?;
        let student = self.form.to_student(false)?;
        self.store.update(position, student)?;
        self.refresh();
        self.clear();
        Ok(Some(Notice::success("Student updated successfully")))
    }

    pub fn delete(&mut self) -> Outcome {
        let positions = self.selected_positions();
        if positions.is_empty() {
            return Err(CustomError::Selection(Action::Delete));
        }
        self.store.delete(positions)?;
        self.refresh();
        self.clear();
        Ok(Some(Notice::success("Student deleted successfully")))
    }

    /// show only the records whose `search_type` column contains `keyword`
    pub fn search(&mut self, search_type: &str, keyword: &str) -> Outcome {
        let keyword = keyword.trim();
        if search_type.is_empty() || keyword.is_empty() {
            return Err(CustomError::SearchCriteria);
        }
        let field: SearchField = search_type.parse()?;

        self.view = self
            .store
            .find(field, keyword)
            .into_iter()
            .map(|(position, _)| position)
            .collect();
        self.selection.clear();

        if self.view.is_empty() {
            return Ok(Some(Notice::info(
                "Search Result",
                "No matching records found",
            )));
        }
        Ok(None)
    }

    pub fn show_all(&mut self) -> Outcome {
        self.refresh();
        Ok(None)
    }

    /// empty every input and drop the selection; the records are untouched
    pub fn clear(&mut self) {
        self.form = StudentForm::default();
        self.selection.clear();
    }

    fn refresh(&mut self) {
        self.view = (0..self.store.len()).collect();
        self.selection.clear();
    }

    fn selected_positions(&self) -> Vec<usize> {
        self.selection
            .iter()
            .filter_map(|&row| self.view.get(row).copied())
            .collect()
    }
}
