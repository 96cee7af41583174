// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// DAO directory the binary rewrites when run without arguments.
#[allow(dead_code)]
pub const DAO_DIR: &str = "src/main/java/com/college/dao";

/// A DAO with the database-connection import and three catch blocks.
#[allow(dead_code)]
pub const THREE_CATCH_DAO: &str = "package com.college.dao;

import com.college.models.Course;
import com.college.utils.DatabaseConnection;

import java.sql.*;

public class CourseDAO {
    public void add(Course c) {
        try (Connection conn = DatabaseConnection.getConnection()) {
            insert(conn, c);
        } catch (SQLException e) {
            e.printStackTrace();
        }
    }

    public void update(Course c) {
        try (Connection conn = DatabaseConnection.getConnection()) {
            update(conn, c);
        } catch (SQLException e) {
            e.printStackTrace();
        }
    }

    public void delete(int id) {
        try (Connection conn = DatabaseConnection.getConnection()) {
            delete(conn, id);
        } catch (SQLException e) {
\t\t\te.printStackTrace();
        }
    }
}
";

/// `THREE_CATCH_DAO` after one rewrite.
#[allow(dead_code)]
pub const THREE_CATCH_DAO_FIXED: &str = "package com.college.dao;

import com.college.models.Course;
import com.college.utils.DatabaseConnection;
import com.college.utils.Logger;

import java.sql.*;

public class CourseDAO {
    public void add(Course c) {
        try (Connection conn = DatabaseConnection.getConnection()) {
            insert(conn, c);
        } catch (SQLException e) {
            Logger.error(\"Database operation failed\", e);
        }
    }

    public void update(Course c) {
        try (Connection conn = DatabaseConnection.getConnection()) {
            update(conn, c);
        } catch (SQLException e) {
            Logger.error(\"Database operation failed\", e);
        }
    }

    public void delete(int id) {
        try (Connection conn = DatabaseConnection.getConnection()) {
            delete(conn, id);
        } catch (SQLException e) {
\t\t\tLogger.error(\"Database operation failed\", e);
        }
    }
}
";

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn daofix_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("daofix"))
}

/// Creates the fixed DAO directory under `root` and returns its path.
#[allow(dead_code)]
pub fn create_dao_dir(root: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = root.join(DAO_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
