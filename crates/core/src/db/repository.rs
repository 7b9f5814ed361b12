use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    counts::RecordCounts,
    faculty::{Faculty, NewFaculty},
    student::{NewStudent, Student},
};

#[async_trait]
pub trait FacultyRepository: Send + Sync {
    /// Store one faculty record, returning it with its assigned id.
    async fn insert_faculty(&self, record: &NewFaculty) -> Result<Faculty>;
    /// Store a batch of faculty records in one transaction, returning the count.
    async fn insert_faculty_batch(&self, records: &[NewFaculty]) -> Result<u64>;
    /// List all faculty records, unfiltered, in insertion order.
    async fn list_faculty(&self) -> Result<Vec<Faculty>>;
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Store one student record, returning it with its assigned id.
    async fn insert_student(&self, record: &NewStudent) -> Result<Student>;
    /// Store a batch of student records in one transaction, returning the count.
    async fn insert_student_batch(&self, records: &[NewStudent]) -> Result<u64>;
    /// List all student records, unfiltered, in insertion order.
    async fn list_students(&self) -> Result<Vec<Student>>;
}

#[async_trait]
pub trait CountsRepository: Send + Sync {
    async fn get_record_counts(&self) -> Result<RecordCounts>;
}

/// Combined repository trait for all record kinds.
pub trait RollbookRepository: FacultyRepository + StudentRepository + CountsRepository {}
