// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for resolving parameter lists into configuration.
//!
//! These tests drive the public API end to end: literal specs, registry
//! readers, the loader over a source, and typed deserialization.

mod test_helpers;

use paramcfg::prelude::*;
use serde::Deserialize;
use test_helpers::{create_service_source, MockParameterSource};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn service_spec() -> Spec {
    Spec::new()
        .field("email", field::str())
        .field("age", field::int())
        .field("isExcellent", field::bool())
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ServiceConfig {
    email: String,
    age: u32,
    is_excellent: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Stripe {
    block_list_id: String,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Truelayer {
    client_id: String,
    sandbox: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
struct PaymentsConfig {
    stripe: Stripe,
    truelayer: Truelayer,
    region: Option<String>,
}

impl ParamConfig for PaymentsConfig {
    const PREFIX: &'static str = "/payments";

    fn spec() -> Spec {
        Spec::new()
            .field("stripe", Spec::new().field("blockListId", field::str()))
            .field(
                "truelayer",
                Spec::new()
                    .field("clientId", field::str())
                    .field("sandbox", field::boolean(FieldOptions::with_default(false))),
            )
            .field("region", field::string(FieldOptions::optional()))
    }
}

#[test]
fn test_resolve_flat_scenario() {
    init_tracing();
    let params = vec![
        Param::new("/service/trevoror/email", "winning@life.com"),
        Param::new("/service/trevoror/age", "22"),
        Param::new("/service/trevoror/isExcellent", "true"),
    ];

    let record = resolve(&service_spec(), "/service/trevoror", &params).unwrap();
    let config: ServiceConfig = record.deserialize_into().unwrap();

    assert_eq!(
        config,
        ServiceConfig {
            email: "winning@life.com".to_string(),
            age: 22,
            is_excellent: true,
        }
    );
}

#[test]
fn test_resolve_missing_fields_scenario() {
    init_tracing();
    let params = vec![Param::new("/missing-fields/age", "22")];

    let err = resolve(&service_spec(), "/missing-fields", &params).unwrap_err();
    assert_eq!(
        err.missing_paths().unwrap(),
        ["/missing-fields/email", "/missing-fields/isExcellent"]
    );
    assert_eq!(
        err.to_string(),
        "Missing required parameters: /missing-fields/email, /missing-fields/isExcellent"
    );
}

#[test]
fn test_boolean_scenario() {
    let spec = Spec::new().field("flag", field::bool());
    for (raw, expected) in [
        ("NO", false),
        ("0", false),
        ("true", true),
        ("yes", true),
        ("", true),
    ] {
        let record = resolve(&spec, "/svc", &[Param::new("/svc/flag", raw)]).unwrap();
        assert_eq!(record.get_bool("flag"), Some(expected), "raw value {:?}", raw);
    }
}

#[test]
fn test_missing_fields_across_nesting_levels() {
    let spec = Spec::new()
        .field("a", field::str())
        .field(
            "outer",
            Spec::new()
                .field("inner", Spec::new().field("b", field::int()))
                .field("present", field::str()),
        )
        .field("c", field::bool());
    let params = vec![Param::new("/svc/outer/present", "here")];

    let err = resolve(&spec, "/svc/", &params).unwrap_err();
    assert_eq!(
        err.missing_paths().unwrap(),
        ["/svc/a", "/svc/outer/inner/b", "/svc/c"]
    );
}

#[test]
fn test_nesting_path_composition() {
    let spec = Spec::new().field("a", Spec::new().field("b", field::str()));
    let params = vec![Param::new("/svc/a/b", "leaf")];

    for prefix in ["/svc", "/svc/"] {
        let record = resolve(&spec, prefix, &params).unwrap();
        assert_eq!(
            record.get_record("a").and_then(|r| r.get_str("b")),
            Some("leaf")
        );
        assert_eq!(spec.leaf_paths(prefix), vec!["/svc/a/b"]);
    }
}

#[test]
fn test_defaults_and_optionals_are_never_missing() {
    let spec = Spec::new()
        .field("port", field::integer(FieldOptions::with_default(8080)))
        .field("name", field::string(FieldOptions::with_default("svc".to_string())))
        .field("nickname", field::string(FieldOptions::optional()));

    let record = resolve(&spec, "/svc", &[]).unwrap();
    assert_eq!(record.get_i64("port"), Some(8080));
    assert_eq!(record.get_str("name"), Some("svc"));
    assert!(record.get("nickname").is_none());
}

#[test]
fn test_extra_parameters_are_ignored() {
    let params = vec![
        Param::new("/service/trevoror/email", "winning@life.com"),
        Param::new("/service/trevoror/age", "22"),
        Param::new("/service/trevoror/isExcellent", "true"),
        Param::new("/service/trevoror/unused", "x"),
        Param::new("/service/trevoror/nested/deep", "y"),
    ];

    let record = resolve(&service_spec(), "/service/trevoror", &params).unwrap();
    assert_eq!(record.len(), 3);
    assert!(!record.contains("unused"));
}

#[test]
fn test_unparseable_integer_fails() {
    let params = vec![
        Param::new("/svc/email", "a@b.c"),
        Param::new("/svc/age", "twenty-two"),
        Param::new("/svc/isExcellent", "true"),
    ];

    let err = resolve(&service_spec(), "/svc", &params).unwrap_err();
    match err {
        ConfigError::TypeConversionError {
            key, target_type, ..
        } => {
            assert_eq!(key, "/svc/age");
            assert_eq!(target_type, "integer");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_registry_reader_and_typed_read() {
    let mut builder = SpecRegistry::builder();
    builder.declare::<PaymentsConfig>();
    let registry = builder.build();

    let params = vec![
        Param::new("/payments/stripe/blockListId", "foo"),
        Param::new("/payments/truelayer/clientId", "bar"),
    ];

    let config: PaymentsConfig = registry.read_as::<PaymentsConfig>(&params).unwrap();
    assert_eq!(
        config,
        PaymentsConfig {
            stripe: Stripe {
                block_list_id: "foo".to_string()
            },
            truelayer: Truelayer {
                client_id: "bar".to_string(),
                sandbox: false,
            },
            region: None,
        }
    );
    assert_eq!(
        registry.prefix::<PaymentsConfig>().map(ParamPath::as_str),
        Some("/payments/")
    );
}

#[test]
fn test_loader_fetches_under_prefix() {
    init_tracing();
    let loader = ParameterLoader::new(create_service_source());
    let reader = ParamReader::new(service_spec(), "/service/trevoror");

    let config: ServiceConfig = loader.load_as(&reader).unwrap();
    assert_eq!(config.email, "winning@life.com");
}

#[test]
fn test_loader_queries_normalized_prefix() {
    let source = std::sync::Arc::new(create_service_source());

    struct Shared(std::sync::Arc<MockParameterSource>);
    impl ParameterSource for Shared {
        fn name(&self) -> &str {
            self.0.name()
        }
        fn parameters_by_path(&self, path: &ParamPath) -> Result<Vec<Param>> {
            self.0.parameters_by_path(path)
        }
    }

    let loader = ParameterLoader::new(Shared(source.clone()));
    loader.load_spec(&service_spec(), "/service/trevoror//").unwrap();
    assert_eq!(source.queried_paths(), vec!["/service/trevoror/"]);
}

#[test]
fn test_loader_registered_type() {
    let mut builder = SpecRegistry::builder();
    builder.declare::<PaymentsConfig>();
    let registry = builder.build();

    let loader = ParameterLoader::new(
        MemorySource::default()
            .with_param("/payments/stripe/blockListId", "foo")
            .with_param("/payments/truelayer/clientId", "bar")
            .with_param("/payments/truelayer/sandbox", "yes")
            .with_param("/payments/region", "eu-west-1"),
    );

    let config: PaymentsConfig = loader.load_registered(&registry).unwrap();
    assert!(config.truelayer.sandbox);
    assert_eq!(config.region.as_deref(), Some("eu-west-1"));
}

#[test]
fn test_loader_source_failure() {
    let loader = ParameterLoader::new(MockParameterSource::new("broken").with_failure(true));
    let err = loader.load_spec(&service_spec(), "/svc").unwrap_err();
    assert!(matches!(err, ConfigError::SourceError { .. }));
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_file_end_to_end() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
payments:
  stripe:
    blockListId: foo
  truelayer:
    clientId: bar
    sandbox: "NO"
unrelated:
  key: value
"#
    )
    .unwrap();
    file.flush().unwrap();

    let loader = ParameterLoader::new(YamlFileAdapter::from_file(file.path()).unwrap());
    let reader = ParamReader::new(PaymentsConfig::spec(), PaymentsConfig::PREFIX);

    let record = loader.load(&reader).unwrap();
    assert_eq!(
        record.get_record("truelayer").and_then(|r| r.get_bool("sandbox")),
        Some(false)
    );
    assert!(record.contains("region"));
    assert!(record.get("region").is_none());
}
