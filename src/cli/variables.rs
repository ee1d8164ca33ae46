//! Workspace variable command arguments

use clap::{Args, Subcommand, ValueEnum};

use crate::hcp::{NewVariable, VariableCategory, VariableUpdate};

/// Variable subcommands
#[derive(Subcommand, Debug)]
pub enum VarAction {
    /// List variables of a workspace
    #[command(visible_alias = "ls")]
    List {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,
    },

    /// Show one variable
    Get {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,

        /// Variable key (or var-xxx ID)
        key: String,
    },

    /// Create a variable
    Create(VarCreateArgs),

    /// Update a variable by key
    Update(VarUpdateArgs),

    /// Delete variables by key
    #[command(visible_alias = "rm")]
    Delete {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,

        /// Variable keys (or var-xxx IDs)
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

/// Variable category
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum VariableCategoryArg {
    /// Terraform input variable (default)
    #[default]
    Terraform,
    /// Environment variable
    Env,
}

impl From<VariableCategoryArg> for VariableCategory {
    fn from(arg: VariableCategoryArg) -> Self {
        match arg {
            VariableCategoryArg::Terraform => VariableCategory::Terraform,
            VariableCategoryArg::Env => VariableCategory::Env,
        }
    }
}

/// Arguments for 'var create'
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        tfectl var create --ws prod region eu-west-1\n  \
        tfectl var create --ws prod AWS_SECRET_ACCESS_KEY xxx --category env --sensitive")]
pub struct VarCreateArgs {
    /// Workspace name or ID
    #[arg(long = "ws")]
    pub workspace: String,

    /// Variable key
    pub key: String,

    /// Variable value (sent verbatim)
    pub value: String,

    /// Variable category
    #[arg(long, value_enum, default_value_t = VariableCategoryArg::Terraform)]
    pub category: VariableCategoryArg,

    /// Parse the value as HCL
    #[arg(long, default_value_t = false)]
    pub hcl: bool,

    /// Write-only value, never shown again
    #[arg(long, default_value_t = false)]
    pub sensitive: bool,

    /// Description
    #[arg(long)]
    pub description: Option<String>,
}

impl VarCreateArgs {
    pub fn to_variable(&self) -> NewVariable {
        NewVariable {
            key: self.key.clone(),
            value: self.value.clone(),
            description: self.description.clone(),
            category: self.category.into(),
            hcl: self.hcl,
            sensitive: self.sensitive,
        }
    }
}

/// Arguments for 'var update'
#[derive(Args, Debug)]
pub struct VarUpdateArgs {
    /// Workspace name or ID
    #[arg(long = "ws")]
    pub workspace: String,

    /// Variable key (or var-xxx ID)
    pub key: String,

    /// New value (sent verbatim)
    #[arg(long)]
    pub value: Option<String>,

    /// New key
    #[arg(long = "rename")]
    pub new_key: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Parse the value as HCL
    #[arg(long)]
    pub hcl: Option<bool>,

    /// Mark the variable sensitive (cannot be undone)
    #[arg(long)]
    pub sensitive: Option<bool>,
}

impl VarUpdateArgs {
    pub fn to_update(&self) -> VariableUpdate {
        VariableUpdate {
            key: self.new_key.clone(),
            value: self.value.clone(),
            description: self.description.clone(),
            hcl: self.hcl,
            sensitive: self.sensitive,
        }
    }
}
