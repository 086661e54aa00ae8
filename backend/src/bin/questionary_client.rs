//! gRPC demo client: walks the question lifecycle against a running server.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tonic::transport::Channel;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use questionary::inbound::grpc::QuestionaryServiceClient;
use questionary::inbound::grpc::proto::{Answer, Question, QuestionUpdate};

#[derive(Debug, Parser)]
#[command(name = "questionary-client", about = "Exercise the questionary gRPC API")]
struct Cli {
    /// gRPC endpoint of the questionary service.
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    endpoint: String,
    /// Owner used for the created question.
    #[arg(long, default_value = "3")]
    user_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
        .map_err(|err| eyre!("tracing init failed: {err}"))?;

    let cli = Cli::parse();
    let mut client = QuestionaryServiceClient::connect(cli.endpoint.clone())
        .await
        .wrap_err_with(|| format!("connecting to {}", cli.endpoint))?;

    run_scenario(&mut client, &cli.user_id).await
}

async fn run_scenario(client: &mut QuestionaryServiceClient<Channel>, user_id: &str) -> Result<()> {
    let all = client.find_all(()).await?.into_inner();
    info!(count = all.questions.len(), "FindAll");

    let owned = client.find_by_user(user_id.to_owned()).await?.into_inner();
    info!(user_id, count = owned.questions.len(), "FindByUser");

    let created = client
        .create(Question {
            statement: "is it great?".to_owned(),
            user_id: user_id.to_owned(),
            ..Question::default()
        })
        .await?
        .into_inner();
    info!(question_id = %created.id, created_on = created.created_on, "Create");

    let answered = client
        .add_answer(Answer {
            answer: "yes".to_owned(),
            question_id: created.id.clone(),
            user_id: "33".to_owned(),
            ..Answer::default()
        })
        .await?
        .into_inner();
    let answer_id = answered
        .answer
        .as_ref()
        .map(|answer| answer.id.clone())
        .ok_or_else(|| eyre!("AddAnswer returned no answer"))?;
    info!(question_id = %created.id, %answer_id, "AddAnswer");

    let mut info = answered;
    if let Some(question) = info.question.as_mut() {
        question.statement = "is it really great?".to_owned();
    }
    if let Some(answer) = info.answer.as_mut() {
        answer.answer = "absolutely".to_owned();
    }
    let updated = client
        .update(QuestionUpdate {
            question_id: created.id.clone(),
            question_info: Some(info),
        })
        .await?
        .into_inner();
    info!(
        statement = updated.question.as_ref().map(|q| q.statement.as_str()),
        answer = updated.answer.as_ref().map(|a| a.answer.as_str()),
        "Update"
    );

    let fetched = client.find_by_id(created.id.clone()).await?.into_inner();
    info!(
        question_id = %created.id,
        answered = fetched.answer.is_some(),
        "FindByID"
    );

    let deleted = client.delete(created.id.clone()).await?.into_inner();
    info!(
        message = %deleted.message,
        status = %deleted.status,
        code = deleted.code,
        "Delete"
    );
    Ok(())
}
