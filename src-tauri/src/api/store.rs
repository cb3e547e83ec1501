use std::collections::BTreeSet;

use log::info;

use super::{
    err::CustomError,
    student::{SearchField, Student, StudentRecord},
};

/// 内存中的学生列表
///
/// Records keep insertion order, which is also display order. A record's
/// serial number is its 1-based position and is rewritten after a delete,
/// so records have no identity beyond where they currently sit.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// append a student, failing if another one already has its roll no, session and course
    pub fn add(&mut self, student: Student) -> Result<&StudentRecord, CustomError> {
        if self.records.iter().any(|r| r.student.same_key(&student)) {
            return Err(CustomError::Duplicate(student.key()));
        }

        let serial_no = self.records.len() + 1;
        info!("adding student {} as serial {}", student.key(), serial_no);
        self.records.push(StudentRecord::new(serial_no, student));
        Ok(&self.records[serial_no - 1])
    }

    /// replace the student at `index`; the record being replaced doesn't count as a duplicate
    pub fn update(&mut self, index: usize, student: Student) -> Result<&StudentRecord, CustomError> {
        self.check_index(index)?;

        let clash = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.student.same_key(&student));
        if clash {
            return Err(CustomError::Duplicate(student.key()));
        }

        info!("updating student at serial {}", index + 1);
        self.records[index] = StudentRecord::new(index + 1, student);
        Ok(&self.records[index])
    }

    /// remove every record at the given positions, then renumber the rest
    ///
    /// Nothing is removed unless all positions are in range.
    pub fn delete<I>(&mut self, indices: I) -> Result<usize, CustomError>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        for &index in &indices {
            self.check_index(index)?;
        }

        // back to front so earlier positions stay valid
        for &index in indices.iter().rev() {
            self.records.remove(index);
        }
        self.renumber();

        info!(
            "deleted {} student(s), {} remaining",
            indices.len(),
            self.records.len()
        );
        Ok(indices.len())
    }

    /// case-insensitive substring search on one column, in store order
    ///
    /// Each hit comes with its position so a filtered display can still be
    /// mapped back to the store.
    pub fn find(&self, field: SearchField, needle: &str) -> Vec<(usize, &StudentRecord)> {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.field_text(field).to_lowercase().contains(&needle))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), CustomError> {
        if index >= self.records.len() {
            return Err(CustomError::Index {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn renumber(&mut self) {
        for (i, record) in self.records.iter_mut().enumerate() {
            record.serial_no = i + 1;
        }
    }
}
