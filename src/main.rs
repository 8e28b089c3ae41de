use std::process::ExitCode;

use env_logger::Env;
use registry_tag_check::{check, Config, TagCheckError};

/// What the process prints and the status it exits with.
#[derive(Debug, PartialEq)]
struct Outcome {
    stdout: String,
    stderr: String,
    code: u8,
}

fn outcome(result: Result<bool, TagCheckError>) -> Outcome {
    match result {
        Ok(exists) => Outcome {
            stdout: format!("{}\n", exists),
            stderr: String::new(),
            code: 0,
        },
        Err(e @ TagCheckError::MissingCredentials) => Outcome {
            stdout: format!("{}\n", e),
            stderr: String::new(),
            code: 1,
        },
        Err(e) => Outcome {
            stdout: String::new(),
            stderr: format!("Error: {}\n", e),
            code: 1,
        },
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let result = match Config::from_env() {
        Ok(config) => check(&config).await,
        Err(e) => Err(e),
    };

    let outcome = outcome(result);
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);

    ExitCode::from(outcome.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use registry_tag_check::check_at;

    fn config(tag: &str) -> Config {
        Config {
            address: String::new(),
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            image_name: "app".to_string(),
            image_tag: tag.to_string(),
        }
    }

    async fn run(status: usize, body: &str, tag: &str) -> Outcome {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/app/tags/list")
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let outcome = outcome(check_at(&config(tag), &server.url()).await);
        mock.assert_async().await;
        outcome
    }

    #[tokio::test]
    async fn listed_tag_prints_true() {
        let outcome = run(200, r#"{"name":"app","tags":["1.0","1.1","latest"]}"#, "1.1").await;

        assert_eq!(outcome.stdout, "true\n");
        assert_eq!(outcome.stderr, "");
        assert_eq!(outcome.code, 0);
    }

    #[tokio::test]
    async fn unlisted_tag_prints_false() {
        let outcome = run(200, r#"{"name":"app","tags":["1.0","1.1"]}"#, "2.0").await;

        assert_eq!(outcome.stdout, "false\n");
        assert_eq!(outcome.code, 0);
    }

    #[tokio::test]
    async fn unauthorized_prints_false() {
        let outcome = run(401, r#"{"errors":[{"code":"UNAUTHORIZED"}]}"#, "1.0").await;

        assert_eq!(outcome.stdout, "false\n");
        assert_eq!(outcome.code, 0);
    }

    #[tokio::test]
    async fn malformed_body_exits_with_error() {
        let outcome = run(200, "not json", "1.0").await;

        assert_eq!(outcome.stdout, "");
        assert!(outcome.stderr.starts_with("Error: malformed tag list"));
        assert_eq!(outcome.code, 1);
    }

    #[test]
    fn missing_credentials_print_diagnostic() {
        assert_eq!(
            outcome(Err(TagCheckError::MissingCredentials)),
            Outcome {
                stdout: "Error: Environment variables for username and/or password are not set.\n"
                    .to_string(),
                stderr: String::new(),
                code: 1,
            }
        );
    }
}
