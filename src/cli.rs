use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "healthtracker",
    version,
    about = "Health records, symptom log and rule-based food, exercise and emotional advice"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override record date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Record weight and height (BMI is computed)
    Record {
        /// Weight in kilograms
        weight_kg: f64,

        /// Height in centimeters (defaults to the profile height)
        height_cm: Option<f64>,

        /// sedentary, light, moderate or active
        #[arg(long)]
        activity: Option<String>,

        /// stressed, anxious, sad, happy or neutral
        #[arg(long)]
        mood: Option<String>,

        /// Free-text description of the day
        #[arg(long)]
        schedule: Option<String>,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Show the latest health record
    Latest,

    /// Weight/BMI history for a period
    Graph {
        /// week, month or year
        #[arg(default_value = "week")]
        period: String,
    },

    /// Log and inspect symptoms
    Symptom {
        #[command(subcommand)]
        action: SymptomAction,
    },

    /// Food, exercise or emotional recommendations
    Recommend {
        /// food, exercise or emotional
        axis: String,
    },

    /// Today's menu adjusted to BMI and recent symptoms
    Menu,

    /// Score, recent symptoms and quick hints
    Dashboard,

    /// Track personal goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Count glasses of water for the day
    Water {
        #[command(subcommand)]
        action: WaterAction,
    },

    /// Manage daily reminders
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SymptomAction {
    /// Log one symptom
    Log {
        /// physical or mental
        r#type: String,

        /// Symptom name, e.g. "Demam" or "Gangguan Tidur"
        name: String,

        /// Severity from 1 to 10
        severity: i64,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Log several symptoms: JSON array or "Demam=7, mental:Stres=5"
    Batch {
        input: String,
    },

    /// List the symptom catalog
    List,

    /// Recent symptoms grouped by day
    History {
        /// Number of recent entries to show
        #[arg(long)]
        last: Option<u32>,
    },

    /// Most frequent symptoms, weekly count and average severity
    Stats,
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a goal
    Add {
        /// Short title, e.g. "Turun 5 kg"
        title: String,

        /// weight, exercise, water, sleep or custom
        r#type: String,

        /// Target value
        target: f64,

        /// Unit of the target, e.g. kg or km
        #[arg(long)]
        unit: Option<String>,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<NaiveDate>,

        /// Longer description
        #[arg(long)]
        description: Option<String>,
    },

    /// List goals with progress, newest first
    List,

    /// Set the current value of a goal
    Progress {
        /// Goal ID
        id: String,

        /// Current value
        current: f64,
    },

    /// Flip a goal between completed and in progress
    Toggle {
        /// Goal ID
        id: String,
    },

    /// Delete a goal
    Remove {
        /// Goal ID
        id: String,
    },

    /// Count total, completed and in-progress goals
    Stats,
}

#[derive(Subcommand)]
pub enum WaterAction {
    /// Show the day's intake
    Status,

    /// Add one glass (250 ml)
    Add,

    /// Take back one glass
    Remove,

    /// Set the daily goal in glasses (1-20)
    Goal {
        glasses: u32,
    },

    /// Recent days, most recent first
    History {
        /// Number of days to show
        #[arg(long, default_value_t = 7)]
        last: u32,
    },
}

#[derive(Subcommand)]
pub enum ReminderAction {
    /// List reminders by time of day
    List,

    /// Create a reminder
    Add {
        /// water, meal, exercise, meditation, rest or custom
        r#type: String,

        /// Label, e.g. "Minum Air"
        label: String,

        /// Time of day (HH:MM)
        time: String,
    },

    /// Change fields of a reminder
    Update {
        /// Reminder ID
        id: String,

        #[arg(long = "type")]
        reminder_type: Option<String>,

        #[arg(long)]
        label: Option<String>,

        /// Time of day (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// true or false
        #[arg(long)]
        active: Option<bool>,
    },

    /// Turn a reminder on or off
    Toggle {
        /// Reminder ID
        id: String,
    },

    /// Delete a reminder
    Remove {
        /// Reminder ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. height, activity_level, limits.history)
        key: String,
        /// Config value
        value: String,
    },
}
