use std::{
    fmt,
    path::{Path, PathBuf},
};

pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MAX_CHARS: usize = 64;
pub const DATABASE_MAX_CHARS: usize = 20;
pub const PORT_MIN: u16 = 1024;
pub const PORT_MAX: u16 = u16::MAX;

/// Raw answers as typed by the user, nothing checked yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub username: String,
    pub password: String,
    pub database: String,
    pub port: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Database,
    Port,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Database => "database",
            Self::Port => "port",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violated constraint of a rejected request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// True if at least one error names `field`
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid input:")?;
        for error in &self.0 {
            write!(f, "\n- {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A request whose four fields all passed validation
///
/// Only [`ProvisioningRequest::validate`] builds one, and nothing mutates it afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ProvisioningRequest {
    username: String,
    password: String,
    database: String,
    port: u16,
}

impl fmt::Debug for ProvisioningRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisioningRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

impl ProvisioningRequest {
    /// Validate all answers at once
    ///
    /// The database name is checked against paths inside `workdir`.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint if any field is invalid
    pub fn validate(answers: &Answers, workdir: &Path) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_length(
            &mut errors,
            Field::Username,
            &answers.username,
            USERNAME_MAX_CHARS,
        );
        check_length(
            &mut errors,
            Field::Password,
            &answers.password,
            PASSWORD_MAX_CHARS,
        );
        check_length(
            &mut errors,
            Field::Database,
            &answers.database,
            DATABASE_MAX_CHARS,
        );

        if let Err(message) = check_directory_name(&answers.database) {
            errors.push(Field::Database, message);
        } else if !answers.database.is_empty() && path_exists(&workdir.join(&answers.database)) {
            errors.push(Field::Database, "Database already exists");
        }

        let port = match parse_port(&answers.port) {
            Ok(port) => port,
            Err(message) => {
                errors.push(Field::Port, message);
                PORT_MIN
            }
        };

        if errors.is_empty() {
            Ok(Self {
                username: answers.username.clone(),
                password: answers.password.clone(),
                database: answers.database.clone(),
                port,
            })
        } else {
            Err(errors)
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Directory the template is cloned into
    #[must_use]
    pub fn target_dir(&self, workdir: &Path) -> PathBuf {
        workdir.join(&self.database)
    }
}

fn check_length(errors: &mut ValidationErrors, field: Field, value: &str, max: usize) {
    if value.is_empty() {
        errors.push(field, "must not be empty");
    } else if value.chars().count() > max {
        errors.push(field, format!("must contain at most {max} character(s)"));
    }
}

/// The name becomes a directory inside the working directory and a git argument
fn check_directory_name(name: &str) -> Result<(), &'static str> {
    if name.starts_with('-') {
        Err("must not start with '-'")
    } else if name.chars().any(std::path::is_separator) {
        Err("must not contain a path separator")
    } else if name == "." || name == ".." {
        Err("must be a directory name")
    } else {
        Ok(())
    }
}

// dangling symlinks count as existing
fn path_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

fn parse_port(raw: &str) -> Result<u16, String> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("must be an integer".to_string());
    }

    match raw.parse::<u16>() {
        Ok(port) if port >= PORT_MIN => Ok(port),
        _ => Err(format!("must be between {PORT_MIN} and {PORT_MAX}")),
    }
}
