//! HOSTCODE - Command Line Entry Point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostcode::{
    AppError, AppResult, AppState, Config,
    api::SignupRequest,
    config::LogFormat,
    constants::DEFAULT_PAGE_SIZE,
    countdown::{Countdown, CountdownTimer},
    registration::RegistrationPopup,
    render,
    services::{AuthService, ContestService, ProblemService, SubmissionService},
};

#[derive(Parser, Debug)]
#[command(name = "hostcode", version, about = "HOSTCODE competitive programming client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List running, upcoming and recent contests
    Contests,

    /// Show one contest
    Contest { id: i64 },

    /// Follow a contest countdown until it ends or Ctrl-C
    Watch { id: i64 },

    /// Register for a contest
    Register {
        id: i64,

        /// Agree to the contest terms
        #[arg(long)]
        agree: bool,
    },

    /// List gym problems
    Problems {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },

    /// Show a problem statement
    Problem { id: i64 },

    /// List submission languages
    Languages,

    /// Submit a solution
    Submit {
        problem: i64,

        /// Judge language, e.g. `python-3.9`
        #[arg(long)]
        language: String,

        /// Source file
        #[arg(long)]
        file: PathBuf,
    },

    /// List your submissions in a contest
    Submissions { contest: i64 },

    /// Show a submission and its test results
    Submission { id: i64 },

    /// Log in and store the access token
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, env = "HOSTCODE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored access token
    Logout,

    /// Create an account
    Signup(SignupArgs),

    /// Show login state and API endpoint
    Status,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    firstname: String,
    #[arg(long)]
    lastname: String,
    /// YYYY-MM-DD
    #[arg(long)]
    dob: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    #[arg(long)]
    mobile: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    organization: String,
}

impl From<SignupArgs> for SignupRequest {
    fn from(args: SignupArgs) -> Self {
        Self {
            username: args.username,
            firstname: args.firstname,
            lastname: args.lastname,
            dob: args.dob,
            password: args.password,
            confirm_password: args.confirm_password,
            mobile: args.mobile,
            email: args.email,
            organization: args.organization,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize tracing
    let (pretty, json) = match config.log.format {
        LogFormat::Pretty => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.rust_log.clone().into()),
        )
        .with(pretty)
        .with(json)
        .init();

    let state = AppState::new(config)?;

    if let Err(err) = run(&state, cli.command).await {
        tracing::debug!(code = err.error_code(), error = %err, "command failed");
        match err {
            AppError::LoginRequired => {
                eprintln!("{} (run `hostcode login`)", err.user_message())
            }
            _ => eprintln!("{}", err.user_message()),
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(state: &AppState, command: Command) -> AppResult<()> {
    let api = state.api();
    let session = state.session();

    match command {
        Command::Contests => {
            let board = ContestService::list_contests(api, state.clock().now()).await?;
            println!("{}", render::contest_board(&board));
        }
        Command::Contest { id } => {
            let contest = ContestService::get_contest(api, id).await?;
            let countdown = Countdown::at(state.clock().now(), contest.start_time, contest.end_time);
            println!("{}", render::contest(&contest, &countdown));
        }
        Command::Watch { id } => watch(state, id).await?,
        Command::Register { id, agree } => {
            let mut popup = RegistrationPopup::new(id);
            popup.open();
            popup.set_agreement(agree);
            ContestService::register(api, session, &mut popup).await;
            println!("{}", render::registration(&popup));
        }
        Command::Problems { page, size } => {
            let board = ProblemService::list_problems(api, page, size).await?;
            println!("{}", render::problem_board(&board));
        }
        Command::Problem { id } => {
            let workspace = ProblemService::open_problem(api, id).await?;
            println!("{}", render::problem(&workspace));
        }
        Command::Languages => {
            let languages = ProblemService::languages(api).await?;
            println!("{}", render::languages(&languages));
        }
        Command::Submit {
            problem,
            language,
            file,
        } => {
            let code = tokio::fs::read_to_string(&file).await.map_err(|e| {
                AppError::Validation(format!("cannot read {}: {e}", file.display()))
            })?;
            ProblemService::submit(api, session, problem, &language, code).await?;
            println!("Submitted");
        }
        Command::Submissions { contest } => {
            let rows = SubmissionService::list_my_submissions(api, session, contest).await?;
            println!("{}", render::submissions(&rows));
        }
        Command::Submission { id } => {
            let report = SubmissionService::get_submission(api, session, id).await?;
            println!("{}", render::submission_report(&report));
        }
        Command::Login { username, password } => {
            AuthService::login(api, session, &username, &password).await?;
            println!("Logged in as {}", username.trim());
        }
        Command::Logout => {
            AuthService::logout(session)?;
            println!("Logged out");
        }
        Command::Signup(args) => {
            let message = AuthService::signup(api, args.into()).await?;
            println!("{message}");
        }
        Command::Status => {
            let status = if session.is_logged_in() {
                "logged in"
            } else {
                "logged out"
            };
            println!("{status} ({})", state.config().api.base_url);
        }
    }

    Ok(())
}

async fn watch(state: &AppState, contest_id: i64) -> AppResult<()> {
    let contest = ContestService::get_contest(state.api(), contest_id).await?;
    println!("{} (#{})", contest.name, contest.cid);

    let mut timer = CountdownTimer::start(state.clock(), contest.start_time, contest.end_time);
    let mut updates = timer.subscribe();
    println!("{}", timer.current());

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let countdown = *updates.borrow_and_update();
                println!("{countdown}");
                if countdown.is_ended() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    timer.stop();
    Ok(())
}
