//! Shared testing utilities for appreg-resolver CLI tests.

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DEFAULT_NAME: &str = "ServerlessImageHandlerDefaultApplicationName";

/// Testing harness with a fake AWS endpoint and a scratch directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    server: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = Server::new();
        Self { root, server }
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub fn endpoint(&self) -> String {
        self.server.url()
    }

    /// Build a command for the compiled binary with credentials and endpoints pointing
    /// at the fake server.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("appreg-resolver").expect("Failed to locate binary");
        cmd.current_dir(self.root.path())
            .env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")
            .env("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
            .env("AWS_REGION", "us-east-1")
            .env("APPREG_CLOUDFORMATION_ENDPOINT", self.endpoint())
            .env("APPREG_REGISTRY_ENDPOINT", self.endpoint())
            .env("APPREG_TIMEOUT_SECS", "2")
            .env_remove("AWS_SESSION_TOKEN")
            .env_remove("APPREG_APPLICATION_LOGICAL_ID_PREFIX")
            .env_remove("APPREG_LOG_FORMAT")
            .env_remove("APPREG_LOG");
        cmd
    }

    /// Write a file into the scratch directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Mock `DescribeStackResources` returning the given `(logical, physical)` pairs.
    pub fn mock_stack_resources(&mut self, resources: &[(&str, &str)]) -> Mock {
        let entries = resources
            .iter()
            .map(|(logical, physical)| {
                format!(
                    r#"{{"LogicalResourceId":"{logical}","PhysicalResourceId":"{physical}","ResourceType":"AWS::S3::Bucket","ResourceStatus":"CREATE_COMPLETE"}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        let body = format!(
            r#"{{"DescribeStackResourcesResponse":{{"DescribeStackResourcesResult":{{"StackResources":[{entries}]}},"ResponseMetadata":{{"RequestId":"req-1"}}}}}}"#
        );

        self.server
            .mock("POST", "/")
            .match_body(mockito::Matcher::UrlEncoded(
                "Action".into(),
                "DescribeStackResources".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Mock `GetApplication` for one identifier.
    pub fn mock_application(&mut self, application: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", format!("/applications/{application}").as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}

/// Custom-resource event as CloudFormation would send it.
#[allow(dead_code)]
pub fn event_json(request_type: &str, custom_action: &str, default_name: Option<&str>) -> String {
    let default_name = default_name
        .map(|name| format!(r#","DefaultName":"{name}""#))
        .unwrap_or_default();
    format!(
        r#"{{
  "RequestType": "{request_type}",
  "ResponseURL": "/cfn-response",
  "PhysicalResourceId": "mock-physical-id",
  "StackId": "mock-stack-id",
  "ServiceToken": "mock-service-token",
  "RequestId": "mock-request-id",
  "LogicalResourceId": "mock-logical-resource-id",
  "ResourceType": "mock-resource-type",
  "ResourceProperties": {{"CustomAction":"{custom_action}"{default_name}}}
}}"#
    )
}
