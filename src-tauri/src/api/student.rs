use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use super::{err::CustomError, validator};

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.label() == s)
            .ok_or(())
    }
}

/// 学生信息, 即表单中用户填写的全部内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    // 学号
    pub roll_no: String,
    // 姓名
    pub name: String,
    pub father_name: String,
    pub mother_name: String,
    pub email: String,
    pub gender: Gender,
    // 联系电话
    pub contact: String,
    // 出生日期
    #[serde(with = "dob_format")]
    pub dob: Date,
    // 学年
    pub session: String,
    // 课程
    pub course: String,
    // 地址, 可以有多行
    pub address: String,
}

impl Student {
    /// the triple two students must never share
    pub fn key(&self) -> DuplicateKey {
        DuplicateKey {
            roll_no: self.roll_no.clone(),
            session: self.session.clone(),
            course: self.course.clone(),
        }
    }

    pub fn same_key(&self, other: &Student) -> bool {
        self.roll_no == other.roll_no
            && self.session == other.session
            && self.course == other.course
    }
}

/// 列表中的一行: 序号 + 学生信息
///
/// `serial_no` is always the 1-based position of the record in the store;
/// the store rewrites it whenever positions shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub serial_no: usize,
    #[serde(flatten)]
    pub student: Student,
}

impl StudentRecord {
    pub fn new(serial_no: usize, student: Student) -> Self {
        Self { serial_no, student }
    }

    /// the text shown in the given column, which is also what search matches against
    pub fn field_text(&self, field: SearchField) -> String {
        let student = &self.student;
        match field {
            SearchField::SerialNo => self.serial_no.to_string(),
            SearchField::RollNo => student.roll_no.clone(),
            SearchField::Name => student.name.clone(),
            SearchField::FatherName => student.father_name.clone(),
            SearchField::MotherName => student.mother_name.clone(),
            SearchField::Email => student.email.clone(),
            SearchField::Gender => student.gender.to_string(),
            SearchField::Contact => student.contact.clone(),
            SearchField::Dob => validator::format_dob(student.dob),
            SearchField::Session => student.session.clone(),
            SearchField::Course => student.course.clone(),
            SearchField::Address => student.address.clone(),
        }
    }
}

/// 学号, 学年, 课程三元组
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateKey {
    pub roll_no: String,
    pub session: String,
    pub course: String,
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll No '{}', Session '{}', and Course '{}'",
            self.roll_no, self.session, self.course
        )
    }
}

/// 表格的列, 也是可选的搜索类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    SerialNo,
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

impl SearchField {
    /// in column order
    pub const ALL: [SearchField; 12] = [
        SearchField::SerialNo,
        SearchField::RollNo,
        SearchField::Name,
        SearchField::FatherName,
        SearchField::MotherName,
        SearchField::Email,
        SearchField::Gender,
        SearchField::Contact,
        SearchField::Dob,
        SearchField::Session,
        SearchField::Course,
        SearchField::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::SerialNo => "Serial No",
            SearchField::RollNo => "Roll No",
            SearchField::Name => "Name",
            SearchField::FatherName => "Father's Name",
            SearchField::MotherName => "Mother's Name",
            SearchField::Email => "Email",
            SearchField::Gender => "Gender",
            SearchField::Contact => "Contact",
            SearchField::Dob => "D.O.B",
            SearchField::Session => "Session",
            SearchField::Course => "Course",
            SearchField::Address => "Address",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchField {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.label() == s)
            .ok_or_else(|| CustomError::InvalidSearchType(s.to_string()))
    }
}

/// (de)serialize the date of birth as `dd-mm-yyyy`
mod dob_format {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::Date;

    use crate::api::validator;

    pub fn serialize<S: Serializer>(dob: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&validator::format_dob(*dob))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        validator::parse_dob(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use time::macros::date;

    pub(crate) fn sample_student(roll_no: &str, name: &str, session: &str, course: &str) -> Student {
        Student {
            roll_no: roll_no.to_string(),
            name: name.to_string(),
            father_name: "Richard Roe".to_string(),
            mother_name: "Jane Roe".to_string(),
            email: "student@example.com".to_string(),
            gender: Gender::Female,
            contact: "9876543210".to_string(),
            dob: date!(2004 - 03 - 07),
            session: session.to_string(),
            course: course.to_string(),
            address: "12 Park Street\nKolkata".to_string(),
        }
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("Other".parse::<Gender>(), Ok(Gender::Other));
        assert!("male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_search_field_labels() {
        assert_eq!("Father's Name".parse::<SearchField>(), Ok(SearchField::FatherName));
        assert_eq!("D.O.B".parse::<SearchField>(), Ok(SearchField::Dob));
        assert_eq!(
            "Phone".parse::<SearchField>(),
            Err(CustomError::InvalidSearchType("Phone".to_string()))
        );
        for field in SearchField::ALL {
            assert_eq!(field.label().parse::<SearchField>(), Ok(field));
        }
    }

    #[test]
    fn test_field_text() {
        let record = StudentRecord::new(3, sample_student("101", "Ann Lee", "2023", "CS"));
        assert_eq!(record.field_text(SearchField::SerialNo), "3");
        assert_eq!(record.field_text(SearchField::Gender), "Female");
        assert_eq!(record.field_text(SearchField::Dob), "07-03-2004");
        assert_eq!(record.field_text(SearchField::Name), "Ann Lee");
    }

    #[test]
    fn test_duplicate_key() {
        let a = sample_student("101", "Ann Lee", "2023", "CS");
        let mut b = sample_student("101", "Bob", "2023", "CS");
        assert!(a.same_key(&b));
        assert_eq!(a.key(), b.key());
        b.course = "EE".to_string();
        assert!(!a.same_key(&b));
        assert_eq!(
            a.key().to_string(),
            "Roll No '101', Session '2023', and Course 'CS'"
        );
    }

    #[test]
    fn test_record_serializes_for_frontend() {
        let record = StudentRecord::new(1, sample_student("101", "Ann Lee", "2023", "CS"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["serialNo"], 1);
        assert_eq!(value["rollNo"], "101");
        assert_eq!(value["fatherName"], "Richard Roe");
        assert_eq!(value["gender"], "Female");
        assert_eq!(value["dob"], "07-03-2004");

        let back: StudentRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
