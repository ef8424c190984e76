use async_trait::async_trait;
use mockall::mock;
use slipway_cloud::command::CommandError;
use slipway_cloud::executor::CliExecutor;
use slipway_cloud::registry::{AuthError, PushError, RegistryClient, RegistryError, registry_host};

mock! {
    Executor {}

    #[async_trait]
    impl CliExecutor for Executor {
        async fn exec(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
        async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), CommandError>;
        async fn exec_with_stdin(
            &self,
            program: &str,
            args: &[String],
            stdin_data: &[u8],
        ) -> Result<String, CommandError>;
    }
}

fn failed(stderr: &str) -> CommandError {
    CommandError::Failed {
        program: "aws".to_owned(),
        args: vec![],
        stderr: stderr.to_owned(),
    }
}

// ── Endpoint ──

#[test]
fn registry_host_formats_account_and_region() {
    assert_eq!(
        registry_host("123456789012", "us-east-1"),
        "123456789012.dkr.ecr.us-east-1.amazonaws.com"
    );
}

// ── Account Resolution ──

#[tokio::test]
async fn resolve_account_trims_output() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|program, args| {
            program == "aws" && args.contains(&"get-caller-identity".to_owned())
        })
        .returning(|_, _| Ok("123456789012\n".to_owned()));

    let client = RegistryClient::with_executor(mock);
    let account = client.resolve_account().await.unwrap();

    assert_eq!(account, "123456789012");
}

#[tokio::test]
async fn resolve_account_failure() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .returning(|_, _| Err(failed("no credentials")));

    let client = RegistryClient::with_executor(mock);
    let result = client.resolve_account().await;

    assert!(matches!(result, Err(RegistryError::Account { .. })));
}

// ── Authentication ──

#[tokio::test]
async fn authenticate_pipes_token_into_docker_login() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|program, args| {
            program == "aws"
                && args.contains(&"get-login-password".to_owned())
                && args.contains(&"us-east-1".to_owned())
        })
        .returning(|_, _| Ok("login-token\n".to_owned()));

    mock.expect_exec_with_stdin()
        .withf(|program, args, data| {
            program == "docker"
                && args.contains(&"login".to_owned())
                && args.contains(&"--password-stdin".to_owned())
                && args.contains(&"123.dkr.ecr.us-east-1.amazonaws.com".to_owned())
                && data == b"login-token"
        })
        .returning(|_, _, _| Ok("Login Succeeded\n".to_owned()));

    let client = RegistryClient::with_executor(mock);
    let result = client
        .authenticate("us-east-1", "123.dkr.ecr.us-east-1.amazonaws.com")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn authenticate_token_fetch_failure() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|_, args| args.contains(&"get-login-password".to_owned()))
        .returning(|_, _| Err(failed("expired credentials")));

    let client = RegistryClient::with_executor(mock);
    let result = client.authenticate("us-east-1", "host").await;

    assert!(matches!(result, Err(AuthError::Token { .. })));
}

#[tokio::test]
async fn authenticate_login_failure() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .returning(|_, _| Ok("tok\n".to_owned()));

    mock.expect_exec_with_stdin()
        .returning(|_, _, _| Err(failed("unauthorized")));

    let client = RegistryClient::with_executor(mock);
    let result = client.authenticate("us-east-1", "host").await;

    assert!(matches!(result, Err(AuthError::Login { ref host, .. }) if host == "host"));
}

// ── Repository Provisioning ──

#[tokio::test]
async fn ensure_repository_skips_create_when_present() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|_, args| args.contains(&"describe-repositories".to_owned()))
        .returning(|_, _| Ok("{}".to_owned()));
    // No create-repository expectation: calling it would panic the mock.

    let client = RegistryClient::with_executor(mock);
    let result = client
        .ensure_repository("ec2-service-staging", "us-east-1")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn ensure_repository_creates_when_missing() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|_, args| args.contains(&"describe-repositories".to_owned()))
        .returning(|_, _| Err(failed("RepositoryNotFoundException")));

    mock.expect_exec()
        .withf(|_, args| {
            args.contains(&"create-repository".to_owned())
                && args.contains(&"ec2-service-staging".to_owned())
        })
        .returning(|_, _| Ok("{}".to_owned()));

    let client = RegistryClient::with_executor(mock);
    let result = client
        .ensure_repository("ec2-service-staging", "us-east-1")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn ensure_repository_create_failure() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|_, args| args.contains(&"describe-repositories".to_owned()))
        .returning(|_, _| Err(failed("RepositoryNotFoundException")));

    mock.expect_exec()
        .withf(|_, args| args.contains(&"create-repository".to_owned()))
        .returning(|_, _| Err(failed("access denied")));

    let client = RegistryClient::with_executor(mock);
    let result = client.ensure_repository("repo", "us-east-1").await;

    assert!(matches!(result, Err(RegistryError::Ensure { ref name, .. }) if name == "repo"));
}

// ── Push ──

#[tokio::test]
async fn push_streams_docker_push() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming()
        .withf(|program, args| {
            program == "docker"
                && args.contains(&"push".to_owned())
                && args.contains(&"host/repo:latest".to_owned())
        })
        .returning(|_, _| Ok(()));

    let client = RegistryClient::with_executor(mock);
    assert!(client.push("host/repo:latest").await.is_ok());
}

#[tokio::test]
async fn push_failure_carries_image_name() {
    let mut mock = MockExecutor::new();

    mock.expect_exec_streaming()
        .returning(|_, _| Err(failed("connection reset")));

    let client = RegistryClient::with_executor(mock);
    let result = client.push("host/repo:abc1234").await;

    assert!(matches!(
        result,
        Err(PushError::Push { ref image, .. }) if image == "host/repo:abc1234"
    ));
}
