use anyhow::Result;
use rusqlite::{Connection, params};

/* A single logged item. Rows are never updated once written, only deleted.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub description: String,
    pub created_at: i64,
}

pub fn create_table(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS items (
            item_id     INTEGER PRIMARY KEY,
            description TEXT,
            timestamp   BIGINT
        )",
        params![],
    )?;
    Ok(())
}

pub fn insert(connection: &Connection, description: &str, created_at: i64) -> Result<Entry> {
    connection.execute(
        "INSERT INTO
            items (
                description, timestamp
            )
        VALUES
            (?1, ?2)
        ",
        params![description, created_at],
    )?;

    Ok(Entry {
        id: connection.last_insert_rowid(),
        description: description.to_string(),
        created_at,
    })
}

pub fn get_all_since(connection: &Connection, since: i64) -> Result<Vec<Entry>> {
    let mut statement = connection.prepare(
        "SELECT
            item_id, description, timestamp
        FROM
            items
        WHERE
            timestamp > ?1
        ORDER BY
            timestamp, item_id
        ",
    )?;

    // description is nullable in the schema, older stores may hold NULLs
    let results = statement
        .query_map(params![since], |row| {
            Ok(Entry {
                id: row.get(0)?,
                description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                created_at: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<Entry>>>()?;
    Ok(results)
}

pub fn delete(connection: &Connection, id: i64) -> Result<bool> {
    let mut statement = connection.prepare(
        "DELETE
        FROM
            items
        WHERE
            item_id = ?1
        ",
    )?;

    let removed = statement.execute(params![id])?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_table(&connection).unwrap();
        connection
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let connection = connection();
        let first = insert(&connection, "one", 10).unwrap();
        let second = insert(&connection, "two", 5).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn get_all_since_is_exclusive_and_ordered() {
        let connection = connection();
        insert(&connection, "late", 300).unwrap();
        insert(&connection, "boundary", 100).unwrap();
        insert(&connection, "early", 200).unwrap();

        let entries = get_all_since(&connection, 100).unwrap();
        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["early", "late"]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let connection = connection();
        for d in ["a", "b", "c"] {
            insert(&connection, d, 42).unwrap();
        }

        let entries = get_all_since(&connection, 0).unwrap();
        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
    }

    #[test]
    fn null_description_reads_as_empty() {
        let connection = connection();
        connection
            .execute(
                "INSERT INTO items (description, timestamp) VALUES (NULL, 7)",
                params![],
            )
            .unwrap();

        let entries = get_all_since(&connection, 0).unwrap();
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn delete_reports_whether_a_row_went_away() {
        let connection = connection();
        let entry = insert(&connection, "gone soon", 1).unwrap();
        assert!(delete(&connection, entry.id).unwrap());
        assert!(!delete(&connection, entry.id).unwrap());
    }
}
