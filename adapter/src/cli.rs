//! Service adapter command line contract
//!
//! The broker runs the adapter once per lifecycle event with the operation
//! name and its JSON/YAML arguments. Results go to stdout; on failure stdout
//! carries the message for the broker user and stderr carries the detail.

use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::binding::Binder;
use crate::errors::AdapterError;
use crate::manifest::ManifestGenerator;
use crate::models::binding::{BoshVms, ManifestSecrets};
use crate::models::deployment::ServiceDeployment;
use crate::models::manifest::BoshManifest;
use crate::models::plan::Plan;
use crate::models::request::RequestParameters;

/// Exit code for a failed operation
pub const EXIT_FAILURE: i32 = 1;

/// Exit code telling the broker an optional operation is not implemented
pub const EXIT_NOT_IMPLEMENTED: i32 = 10;

pub const USAGE: &str = "usage:
  redis-service-adapter generate-manifest <service-deployment-JSON> <plan-JSON> <request-params-JSON> <previous-manifest-YAML> <previous-plan-JSON>
  redis-service-adapter create-binding <binding-ID> <bosh-VMs-JSON> <manifest-YAML> <request-params-JSON> [<secrets-JSON>]
  redis-service-adapter delete-binding <binding-ID> <bosh-VMs-JSON> <manifest-YAML> <request-params-JSON>
  redis-service-adapter --version";

/// A parsed adapter invocation
#[derive(Debug, Clone)]
pub enum Command {
    GenerateManifest {
        deployment: ServiceDeployment,
        plan: Plan,
        request_params: RequestParameters,
        previous_manifest: Option<BoshManifest>,
        previous_plan: Option<Plan>,
    },
    CreateBinding {
        binding_id: String,
        topology: BoshVms,
        manifest: BoshManifest,
        request_params: RequestParameters,
        secrets: Option<ManifestSecrets>,
    },
    DeleteBinding {
        binding_id: String,
        topology: BoshVms,
        manifest: BoshManifest,
        request_params: RequestParameters,
    },
    /// An operation of the broker contract this adapter does not offer
    NotImplemented(String),
}

/// What to report back to the broker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Write to stdout and exit 0
    Output(String),
    /// Exit 0 without output
    Done,
    /// Exit with [`EXIT_NOT_IMPLEMENTED`]
    NotImplemented,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Output(_) | Outcome::Done => 0,
            Outcome::NotImplemented => EXIT_NOT_IMPLEMENTED,
        }
    }
}

/// `--version` only counts in the operation position, never as an operation argument
pub fn is_version_request(args: &[String]) -> bool {
    args.first().is_some_and(|arg| arg == "--version")
}

/// Parse the arguments following the program name
pub fn parse_command(args: &[String]) -> Result<Command, AdapterError> {
    let (operation, rest) = args
        .split_first()
        .ok_or_else(|| AdapterError::Usage("missing operation".to_string()))?;

    match operation.as_str() {
        "generate-manifest" => {
            let [deployment, plan, request_params, previous_manifest, previous_plan] =
                expect_args::<5>(operation, rest)?;
            Ok(Command::GenerateManifest {
                deployment: from_json(deployment)?,
                plan: from_json(plan)?,
                request_params: from_json(request_params)?,
                previous_manifest: optional_from_yaml(previous_manifest)?,
                previous_plan: optional_from_json(previous_plan)?,
            })
        }
        "create-binding" => {
            let (required, secrets) = match rest.len() {
                4 => (rest, None),
                5 => (&rest[..4], Some(rest[4].as_str())),
                n => {
                    return Err(AdapterError::Usage(format!(
                        "{} takes 4 or 5 arguments, got {}",
                        operation, n
                    )))
                }
            };
            let [binding_id, topology, manifest, request_params] =
                expect_args::<4>(operation, required)?;
            Ok(Command::CreateBinding {
                binding_id: binding_id.to_string(),
                topology: from_json(topology)?,
                manifest: from_yaml(manifest)?,
                request_params: from_json(request_params)?,
                secrets: secrets
                    .map(optional_from_json::<ManifestSecrets>)
                    .transpose()?
                    .flatten(),
            })
        }
        "delete-binding" => {
            let [binding_id, topology, manifest, request_params] =
                expect_args::<4>(operation, rest)?;
            Ok(Command::DeleteBinding {
                binding_id: binding_id.to_string(),
                topology: from_json(topology)?,
                manifest: from_yaml(manifest)?,
                request_params: from_json(request_params)?,
            })
        }
        "dashboard-url" | "generate-plan-schemas" => {
            Ok(Command::NotImplemented(operation.clone()))
        }
        other => Err(AdapterError::Usage(format!("unknown operation '{}'", other))),
    }
}

/// The adapter's two components behind the command line
pub struct Adapter {
    pub generator: ManifestGenerator,
    pub binder: Binder,
}

impl Adapter {
    pub fn new(generator: ManifestGenerator, binder: Binder) -> Self {
        Self { generator, binder }
    }

    pub fn execute(&self, command: Command) -> Result<Outcome, AdapterError> {
        match command {
            Command::GenerateManifest {
                deployment,
                plan,
                request_params,
                previous_manifest,
                previous_plan,
            } => {
                let manifest = self.generator.generate_manifest(
                    &deployment,
                    &plan,
                    &request_params,
                    previous_manifest.as_ref(),
                    previous_plan.as_ref(),
                )?;
                Ok(Outcome::Output(render_manifest(&manifest)?))
            }
            Command::CreateBinding {
                binding_id,
                topology,
                manifest,
                request_params,
                secrets,
            } => {
                let binding = self.binder.create_binding(
                    &binding_id,
                    &topology,
                    &manifest,
                    &request_params,
                    secrets.as_ref(),
                )?;
                Ok(Outcome::Output(serde_json::to_string(&binding)?))
            }
            Command::DeleteBinding {
                binding_id,
                topology,
                manifest,
                request_params,
            } => {
                self.binder
                    .delete_binding(&binding_id, &topology, &manifest, &request_params)?;
                Ok(Outcome::Done)
            }
            Command::NotImplemented(operation) => {
                info!("{} is not implemented by this adapter", operation);
                Ok(Outcome::NotImplemented)
            }
        }
    }

    /// Parse and execute, returning the process exit code and stdout text
    pub fn run(&self, args: &[String]) -> (i32, String) {
        let result = parse_command(args).and_then(|command| self.execute(command));
        match result {
            Ok(outcome) => {
                let code = outcome.exit_code();
                match outcome {
                    Outcome::Output(text) => (code, text),
                    _ => (code, String::new()),
                }
            }
            Err(AdapterError::Usage(reason)) => {
                error!("{}\n{}", reason, USAGE);
                (EXIT_FAILURE, String::new())
            }
            Err(e) => {
                error!("{}", e);
                (EXIT_FAILURE, e.user_message())
            }
        }
    }
}

fn expect_args<'a, const N: usize>(
    operation: &str,
    args: &'a [String],
) -> Result<[&'a str; N], AdapterError> {
    if args.len() != N {
        return Err(AdapterError::Usage(format!(
            "{} takes {} arguments, got {}",
            operation,
            N,
            args.len()
        )));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Render a manifest as YAML the broker and BOSH read back unchanged.
///
/// JSON is a YAML subset with every string quoted, so values such as the
/// `"yes"`/`"no"` persistence setting cannot turn into YAML 1.1 booleans.
pub fn render_manifest(manifest: &BoshManifest) -> Result<String, AdapterError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

fn from_json<T: DeserializeOwned>(raw: &str) -> Result<T, AdapterError> {
    Ok(serde_json::from_str(raw)?)
}

fn from_yaml<T: DeserializeOwned>(raw: &str) -> Result<T, AdapterError> {
    Ok(serde_yaml::from_str(raw)?)
}

/// Empty text and `null` both mean "not supplied"
fn optional_from_json<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, AdapterError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str(raw)?)
}

/// Empty text means "not supplied"
fn optional_from_yaml<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, AdapterError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_yaml::from_str(raw)?)
}
