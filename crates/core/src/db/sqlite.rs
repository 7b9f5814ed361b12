use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::error::Result;
use crate::models::{
    counts::RecordCounts,
    faculty::{Faculty, NewFaculty},
    student::{NewStudent, Student},
};

use super::repository::{
    CountsRepository, FacultyRepository, RollbookRepository, StudentRepository,
};

#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl RollbookRepository for SqliteRepository {}

fn row_to_faculty(r: &sqlx::sqlite::SqliteRow) -> Faculty {
    Faculty {
        id: r.get("id"),
        name: r.get("name"),
        designation: r.get("designation"),
        branch: r.get("branch"),
    }
}

fn row_to_student(r: &sqlx::sqlite::SqliteRow) -> Student {
    Student {
        id: r.get("id"),
        name: r.get("name"),
        roll_number: r.get("roll_number"),
        branch: r.get("branch"),
    }
}

#[async_trait]
impl FacultyRepository for SqliteRepository {
    async fn insert_faculty(&self, record: &NewFaculty) -> Result<Faculty> {
        let result =
            sqlx::query("INSERT INTO faculty (name, designation, branch) VALUES (?1, ?2, ?3)")
                .bind(&record.name)
                .bind(&record.designation)
                .bind(&record.branch)
                .execute(&self.pool)
                .await?;

        Ok(Faculty {
            id: result.last_insert_rowid(),
            name: record.name.clone(),
            designation: record.designation.clone(),
            branch: record.branch.clone(),
        })
    }

    async fn insert_faculty_batch(&self, records: &[NewFaculty]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        for record in records {
            sqlx::query("INSERT INTO faculty (name, designation, branch) VALUES (?1, ?2, ?3)")
                .bind(&record.name)
                .bind(&record.designation)
                .bind(&record.branch)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(records.len() as u64)
    }

    async fn list_faculty(&self) -> Result<Vec<Faculty>> {
        let rows =
            sqlx::query("SELECT id, name, designation, branch FROM faculty ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(row_to_faculty).collect())
    }
}

#[async_trait]
impl StudentRepository for SqliteRepository {
    async fn insert_student(&self, record: &NewStudent) -> Result<Student> {
        let result =
            sqlx::query("INSERT INTO students (name, roll_number, branch) VALUES (?1, ?2, ?3)")
                .bind(&record.name)
                .bind(&record.roll_number)
                .bind(&record.branch)
                .execute(&self.pool)
                .await?;

        Ok(Student {
            id: result.last_insert_rowid(),
            name: record.name.clone(),
            roll_number: record.roll_number.clone(),
            branch: record.branch.clone(),
        })
    }

    async fn insert_student_batch(&self, records: &[NewStudent]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        for record in records {
            sqlx::query("INSERT INTO students (name, roll_number, branch) VALUES (?1, ?2, ?3)")
                .bind(&record.name)
                .bind(&record.roll_number)
                .bind(&record.branch)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(records.len() as u64)
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        let rows =
            sqlx::query("SELECT id, name, roll_number, branch FROM students ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(row_to_student).collect())
    }
}

#[async_trait]
impl CountsRepository for SqliteRepository {
    async fn get_record_counts(&self) -> Result<RecordCounts> {
        let faculty: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM faculty")
            .fetch_one(&self.pool)
            .await?;
        let students: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(RecordCounts {
            faculty: faculty.0,
            students: students.0,
            total: faculty.0 + students.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabasePool;

    async fn setup_repo() -> SqliteRepository {
        let pool = DatabasePool::new_sqlite_memory().await.unwrap();
        match pool {
            DatabasePool::Sqlite(p) => SqliteRepository::new(p),
        }
    }

    fn sample_faculty() -> NewFaculty {
        NewFaculty {
            name: "A".to_string(),
            designation: "Prof".to_string(),
            branch: "CS".to_string(),
        }
    }

    fn sample_student() -> NewStudent {
        NewStudent {
            name: "X".to_string(),
            roll_number: "R1".to_string(),
            branch: "EE".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_faculty_assigns_id() {
        let repo = setup_repo().await;
        let stored = repo.insert_faculty(&sample_faculty()).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.name, "A");
        assert_eq!(stored.designation, "Prof");
        assert_eq!(stored.branch, "CS");
    }

    #[tokio::test]
    async fn insert_faculty_ids_ascend() {
        let repo = setup_repo().await;
        let first = repo.insert_faculty(&sample_faculty()).await.unwrap();
        let second = repo.insert_faculty(&sample_faculty()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn list_faculty_empty() {
        let repo = setup_repo().await;
        assert!(repo.list_faculty().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_faculty_returns_inserted_in_order() {
        let repo = setup_repo().await;
        repo.insert_faculty(&NewFaculty {
            name: "A".into(),
            designation: "Prof".into(),
            branch: "CS".into(),
        })
        .await
        .unwrap();
        repo.insert_faculty(&NewFaculty {
            name: "B".into(),
            designation: "Lecturer".into(),
            branch: "EE".into(),
        })
        .await
        .unwrap();

        let all = repo.list_faculty().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "A");
        assert_eq!(all[1].name, "B");
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn insert_faculty_batch_inserts_all() {
        let repo = setup_repo().await;
        let batch = vec![sample_faculty(); 3];
        let inserted = repo.insert_faculty_batch(&batch).await.unwrap();
        assert_eq!(inserted, 3);
        assert_eq!(repo.list_faculty().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn insert_faculty_batch_empty_is_ok() {
        let repo = setup_repo().await;
        let inserted = repo.insert_faculty_batch(&[]).await.unwrap();
        assert_eq!(inserted, 0);
        assert!(repo.list_faculty().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_rows_are_stored_twice() {
        // No dedup key: repeating an import produces duplicate records.
        let repo = setup_repo().await;
        let batch = vec![sample_faculty(), sample_faculty()];
        repo.insert_faculty_batch(&batch).await.unwrap();
        repo.insert_faculty_batch(&batch).await.unwrap();
        assert_eq!(repo.list_faculty().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn insert_student_assigns_id() {
        let repo = setup_repo().await;
        let stored = repo.insert_student(&sample_student()).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.roll_number, "R1");
    }

    #[tokio::test]
    async fn student_ids_independent_of_faculty() {
        let repo = setup_repo().await;
        repo.insert_faculty(&sample_faculty()).await.unwrap();
        let student = repo.insert_student(&sample_student()).await.unwrap();
        assert_eq!(student.id, 1);
    }

    #[tokio::test]
    async fn insert_student_batch_inserts_all() {
        let repo = setup_repo().await;
        let batch = vec![sample_student(); 4];
        let inserted = repo.insert_student_batch(&batch).await.unwrap();
        assert_eq!(inserted, 4);
        assert_eq!(repo.list_students().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn empty_fields_are_stored_verbatim() {
        // Bulk rows with missing positions arrive as empty strings; the store
        // accepts them as-is.
        let repo = setup_repo().await;
        let stored = repo
            .insert_faculty(&NewFaculty {
                name: "A".into(),
                designation: String::new(),
                branch: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(stored.designation, "");

        let all = repo.list_faculty().await.unwrap();
        assert_eq!(all[0].branch, "");
    }

    #[tokio::test]
    async fn record_counts_cover_both_kinds() {
        let repo = setup_repo().await;
        repo.insert_faculty(&sample_faculty()).await.unwrap();
        repo.insert_student_batch(&vec![sample_student(); 2])
            .await
            .unwrap();

        let counts = repo.get_record_counts().await.unwrap();
        assert_eq!(counts.faculty, 1);
        assert_eq!(counts.students, 2);
        assert_eq!(counts.total, 3);
    }
}
