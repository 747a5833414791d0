/// Integration tests for the application layer
mod test_utilities;

use serde_yaml_ng::Value;
use stack_exports::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn yaml(source: &str) -> Value {
    serde_yaml_ng::from_str(source).unwrap()
}

fn run_yaml(
    content: &str,
    section: Option<&str>,
) -> (Result<NormalizeResponse>, MockProgressReporter) {
    let progress_reporter = MockProgressReporter::new();
    let use_case = NormalizeOutputsUseCase::new(
        MockTemplateReader::new(content),
        YamlTemplateFormatter::new(),
        YamlTemplateFormatter::new(),
        progress_reporter.clone(),
    );

    let request = NormalizeRequest::new(PathBuf::from("serverless.yml"), TemplateFormat::Yaml)
        .with_section(section.map(str::to_string));
    (use_case.execute(request), progress_reporter)
}

#[test]
fn test_stack_scalar_output() {
    let (result, _) = run_yaml("resources:\n  Outputs:\n    key: value\n", Some("resources"));

    let document = result.unwrap().template.into_document();
    assert_eq!(
        document["resources"]["Outputs"],
        yaml("{ key: { Value: value } }")
    );
}

#[test]
fn test_stack_shorthand_export() {
    let (result, _) = run_yaml(
        "resources:\n  Outputs:\n    logicalId:\n      myKey: myValue\n",
        Some("resources"),
    );

    let document = result.unwrap().template.into_document();
    assert_eq!(
        document["resources"]["Outputs"],
        yaml("{ logicalId: { Export: { Name: myKey }, Value: myValue } }")
    );
}

#[test]
fn test_standard_outputs_unaltered() {
    let source = r#"
resources:
  Outputs:
    readOnlyKey:
      Value: ExportValue
      Export:
        Name: ExportKey
"#;
    let (result, _) = run_yaml(source, Some("resources"));

    let response = result.unwrap();
    assert!(!response.changed);
    assert_eq!(response.template.into_document(), yaml(source));
}

#[test]
fn test_serverless_attribute_strings() {
    let (result, _) = run_yaml(
        r#"
resources:
  Resources:
    queue:
      Type: AWS::SQS::Queue
      Properties:
        QueueName: queue
  Outputs:
    queueArn: Fn::GetAtt[queue, Arn]
"#,
        Some("resources"),
    );

    let document = result.unwrap().template.into_document();
    assert_eq!(
        document["resources"]["Outputs"],
        yaml("{ queueArn: { Value: 'Fn::GetAtt[queue, Arn]' } }")
    );
}

#[test]
fn test_resource_primitive_outputs() {
    let (result, progress_reporter) = run_yaml(
        r#"
resources:
  Resources:
    Q:
      Type: AWS::SQS::Queue
      Outputs:
        key: value
      Properties:
        QueueName: Q
"#,
        Some("resources"),
    );

    let response = result.unwrap();
    assert_eq!(response.report.stripped_resources, vec!["Q".to_string()]);

    let document = response.template.into_document();
    assert_eq!(
        document["resources"]["Resources"],
        yaml("{ Q: { Type: AWS::SQS::Queue, Properties: { QueueName: Q } } }")
    );
    assert_eq!(
        document["resources"]["Outputs"],
        yaml("{ key: { Value: value } }")
    );
    assert!(progress_reporter.has_message_containing("1 from resources"));
}

#[test]
fn test_duplicate_across_stack_and_resources() {
    let (result, progress_reporter) = run_yaml(
        r#"
resources:
  Resources:
    Q:
      Type: AWS::SQS::Queue
      Outputs:
        key: value
      Properties:
        QueueName: Q
  Outputs:
    key: value
"#,
        Some("resources"),
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Duplicate export key 'key'"));
    assert!(matches!(
        err.downcast_ref::<NormalizationError>(),
        Some(NormalizationError::DuplicateKey { key }) if key == "key"
    ));
    assert!(!progress_reporter.has_message_containing("Completed:"));
}

#[test]
fn test_duplicate_across_two_resources() {
    let (result, _) = run_yaml(
        r#"
Resources:
  First:
    Type: AWS::SNS::Topic
    Outputs:
      topicArn: !Ref First
  Second:
    Type: AWS::SNS::Topic
    Outputs:
      topicArn: !Ref Second
"#,
        None,
    );

    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<NormalizationError>().map(NormalizationError::key),
        Some("topicArn")
    );
}

#[test]
fn test_normalizing_twice_is_stable() {
    let source = r#"
Resources:
  Bucket:
    Type: AWS::S3::Bucket
    Outputs:
      bucketName: !Ref Bucket
Outputs:
  region: eu-west-1
  bucketArn:
    shared-bucket-arn: !GetAtt Bucket.Arn
"#;
    let (first, _) = run_yaml(source, None);
    let first = first.unwrap();
    assert!(first.changed);

    let (second, _) = run_yaml(first.content.as_deref().unwrap(), None);
    let second = second.unwrap();
    assert!(!second.changed);
    assert_eq!(second.content, first.content);
}

#[test]
fn test_reader_failure_propagates() {
    let use_case = NormalizeOutputsUseCase::new(
        MockTemplateReader::with_failure(),
        YamlTemplateFormatter::new(),
        YamlTemplateFormatter::new(),
        MockProgressReporter::new(),
    );

    let request = NormalizeRequest::new(PathBuf::from("template.yml"), TemplateFormat::Yaml);
    let err = use_case.execute(request).unwrap_err();

    assert!(err.to_string().contains("Mock template read failure"));
}

#[test]
fn test_lifecycle_hooks_are_traced_in_order() {
    let (result, progress_reporter) = run_yaml("Outputs:\n  key: value\n", None);
    result.unwrap();

    let messages = progress_reporter.get_messages();
    let position = |needle: &str| {
        messages
            .iter()
            .position(|m| m.contains(needle))
            .unwrap_or_else(|| panic!("missing message: {}", needle))
    };

    let init = position("Running hook: initialize");
    let before = position("Running hook: before:package:initialize");
    let after = position("Running hook: after:package:initialize");
    assert!(init < before && before < after);
}

#[test]
fn test_formatter_factory_json_round_trip() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = NormalizeOutputsUseCase::new(
        MockTemplateReader::new(
            r#"{
  "Resources": { "Topic": { "Type": "AWS::SNS::Topic", "Outputs": { "topicName": "orders" } } },
  "Outputs": { "topicArn": { "orders-topic-arn": { "Ref": "Topic" } } }
}"#,
        ),
        FormatterFactory::create(TemplateFormat::Json),
        FormatterFactory::create(TemplateFormat::Json),
        progress_reporter,
    );

    let request = NormalizeRequest::new(PathBuf::from("template.json"), TemplateFormat::Json);
    let response = use_case.execute(request).unwrap();

    let output: serde_json::Value =
        serde_json::from_str(response.content.as_deref().unwrap()).unwrap();
    assert_eq!(
        output["Outputs"],
        serde_json::json!({
            "topicArn": { "Export": { "Name": "orders-topic-arn" }, "Value": { "Ref": "Topic" } },
            "topicName": { "Value": "orders" }
        })
    );
    assert!(output["Resources"]["Topic"].get("Outputs").is_none());
}
