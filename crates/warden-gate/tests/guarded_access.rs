//! End-to-end scenarios through the full pipeline: registry, resolver,
//! policy, and gate, with demo business operations as the wrapped
//! functions.

use std::sync::atomic::{AtomicUsize, Ordering};
use warden_gate::{
    CallArgument, CallArguments, GateError, MemberDirectory, NullSink, OperationRegistry,
    PermissionGate, ResolutionStrategy,
};
use warden_types::{AccessSubject, MemberId, MemberLevel, ResourceId};

/// The demo access service: three operations, one per required level,
/// each returning a formatted message built from the resolved ids.
fn access_service(registry: &mut OperationRegistry, strategy: ResolutionStrategy) {
    registry.register("access.read", MemberLevel::Read, strategy);
    registry.register("access.maintain", MemberLevel::Maintain, strategy);
    registry.register("access.host", MemberLevel::Host, strategy);
}

fn read_infos(args: &CallArguments) -> String {
    let caller = args.named("loginMemberId").and_then(|a| a.value.as_id());
    let number = args.named("accessNumber").and_then(|a| a.value.as_id());
    format!(
        "member {} read data {}",
        caller.unwrap_or_default(),
        number.unwrap_or_default()
    )
}

fn named_args(caller: u64, number: u64) -> CallArguments {
    CallArguments::from(vec![
        CallArgument::id("loginMemberId", caller),
        CallArgument::id("accessNumber", number),
    ])
}

fn gate_for(caller_level: MemberLevel, strategy: ResolutionStrategy) -> PermissionGate {
    let directory = MemberDirectory::new();
    directory.set_level(MemberId::new(1), caller_level);

    let mut registry = OperationRegistry::new();
    access_service(&mut registry, strategy);

    PermissionGate::new(registry, directory).with_sink(NullSink)
}

#[test]
fn read_caller_passes_read_operation() {
    // Scenario A: required READ, caller READ, subject (1, 1).
    let gate = gate_for(MemberLevel::Read, ResolutionStrategy::NamedParameters);

    let result = gate.invoke("access.read", &named_args(1, 1), read_infos);
    assert_eq!(result, Ok("member 1 read data 1".to_string()));
}

#[test]
fn read_caller_is_denied_host_operation() {
    // Scenario B: required HOST, caller READ — operation must not run.
    let gate = gate_for(MemberLevel::Read, ResolutionStrategy::NamedParameters);
    let side_effects = AtomicUsize::new(0);

    let result = gate.invoke("access.host", &named_args(1, 1), |_| {
        side_effects.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(
        result,
        Err(GateError::AccessDenied {
            caller: MemberId::new(1),
            required: MemberLevel::Host,
        })
    );
    assert_eq!(side_effects.load(Ordering::SeqCst), 0);
}

#[test]
fn unresolvable_arguments_fail_before_policy() {
    // Scenario C: required MAINTAIN, no resolvable subject.
    let gate = gate_for(MemberLevel::Host, ResolutionStrategy::NamedParameters);
    let args = CallArguments::from(vec![CallArgument::text("note", "no ids here")]);

    let result = gate.invoke("access.maintain", &args, |_| ());
    assert_eq!(
        result,
        Err(GateError::MissingParameter {
            name: "loginMemberId".into()
        })
    );

    // Same call through the structured strategy fails with its own kind.
    let gate = gate_for(MemberLevel::Host, ResolutionStrategy::StructuredObject);
    let result = gate.invoke("access.maintain", &args, |_| ());
    assert_eq!(result, Err(GateError::SubjectNotFound));
}

#[test]
fn host_caller_passes_every_operation() {
    let gate = gate_for(MemberLevel::Host, ResolutionStrategy::NamedParameters);

    for op in ["access.read", "access.maintain", "access.host"] {
        assert!(gate.invoke(op, &named_args(1, 1), |_| ()).is_ok(), "{op}");
    }
}

#[test]
fn maintain_caller_stops_at_host() {
    let gate = gate_for(MemberLevel::Maintain, ResolutionStrategy::NamedParameters);

    assert!(gate.invoke("access.read", &named_args(1, 1), |_| ()).is_ok());
    assert!(gate
        .invoke("access.maintain", &named_args(1, 1), |_| ())
        .is_ok());
    assert!(matches!(
        gate.invoke("access.host", &named_args(1, 1), |_| ()),
        Err(GateError::AccessDenied { .. })
    ));
}

#[test]
fn structured_strategy_end_to_end() {
    let gate = gate_for(MemberLevel::Maintain, ResolutionStrategy::StructuredObject);
    let subject = AccessSubject::new(MemberId::new(1), ResourceId::new(5));
    let args = CallArguments::from(vec![
        CallArgument::text("note", "unrelated"),
        CallArgument::subject("info", subject),
    ]);

    let result = gate.invoke("access.maintain", &args, |inner| {
        let s = inner
            .iter()
            .find_map(|a| a.value.as_subject())
            .copied()
            .unwrap();
        format!("{} maintained {}", s.caller(), s.resource())
    });

    assert_eq!(result, Ok("member:1 maintained resource:5".to_string()));
}

#[test]
fn first_subject_wins_end_to_end() {
    // Two subject-shaped arguments: the first decides whose level is
    // checked, deterministically on every run.
    let directory = MemberDirectory::new();
    directory.set_level(MemberId::new(1), MemberLevel::Host);
    directory.set_level(MemberId::new(2), MemberLevel::Read);

    let mut registry = OperationRegistry::new();
    access_service(&mut registry, ResolutionStrategy::StructuredObject);
    let gate = PermissionGate::new(registry, directory).with_sink(NullSink);

    let args = CallArguments::from(vec![
        CallArgument::subject(
            "first",
            AccessSubject::new(MemberId::new(1), ResourceId::new(1)),
        ),
        CallArgument::subject(
            "second",
            AccessSubject::new(MemberId::new(2), ResourceId::new(2)),
        ),
    ]);

    for _ in 0..3 {
        // Member 1 (HOST) is the first candidate, so the call passes even
        // though member 2 only holds READ.
        assert!(gate.invoke("access.host", &args, |_| ()).is_ok());
    }
}

#[test]
fn decisions_do_not_drift_across_repeated_calls() {
    let gate = gate_for(MemberLevel::Read, ResolutionStrategy::NamedParameters);

    for _ in 0..10 {
        assert!(gate
            .invoke("access.read", &named_args(1, 1), read_infos)
            .is_ok());
        assert!(gate
            .invoke("access.host", &named_args(1, 1), read_infos)
            .is_err());
    }
}

#[test]
fn level_change_in_directory_changes_later_decisions() {
    // The gate is stateless; only the injected lookup carries state.
    let directory = std::sync::Arc::new(MemberDirectory::new());
    directory.set_level(MemberId::new(1), MemberLevel::Read);

    let mut registry = OperationRegistry::new();
    access_service(&mut registry, ResolutionStrategy::NamedParameters);
    let gate = PermissionGate::new(registry, directory.clone()).with_sink(NullSink);

    assert!(gate.invoke("access.host", &named_args(1, 1), |_| ()).is_err());

    directory.set_level(MemberId::new(1), MemberLevel::Host);
    assert!(gate.invoke("access.host", &named_args(1, 1), |_| ()).is_ok());
}
