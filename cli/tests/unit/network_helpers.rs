//! Network resource helpers against the recording engine.

#![allow(clippy::expect_used)]

use netstack_cli::application::services::network::{
    create_internet_gateway, create_main_route_table_association, create_route_table,
    create_route_table_association, create_subnet, create_vpc,
};
use netstack_common::{Conventions, ResourceTags, Visibility, tokens};

use crate::mocks::{RegionUnavailable, RejectingIds, WithholdingUrns, test_engine};

fn expected_tags(name: &str) -> ResourceTags {
    ResourceTags {
        name: name.to_string(),
        created_by: "Pulumi".to_string(),
    }
}

// ── create_vpc ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_vpc_named_after_stack_and_region() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, Some("10.0.0.0/16"))
        .await
        .expect("vpc");

    assert!(vpc.urn.resolve().await.expect("urn").contains("test-stack - test-region"));
    assert_eq!(vpc.name, "test-stack - test-region");
    assert_eq!(vpc.tags().resolve().await.expect("tags"), expected_tags("test-stack"));
    assert!(vpc.enable_dns_hostnames().resolve().await.expect("dns"));
}

#[tokio::test]
async fn test_vpc_defaults_cidr_block() {
    let engine = test_engine();
    let vpc = create_vpc(&engine, &Conventions::default(), None)
        .await
        .expect("vpc");
    assert_eq!(vpc.cidr_block().resolve().await.expect("cidr"), "10.0.0.0/16");
}

#[tokio::test]
async fn test_vpc_uses_configured_created_by() {
    let engine = test_engine();
    let conventions = Conventions {
        created_by: "platform-team".to_string(),
        ..Conventions::default()
    };
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let tags = vpc.tags().resolve().await.expect("tags");
    assert_eq!(tags.created_by, "platform-team");
}

#[tokio::test]
async fn test_vpc_region_failure_propagates() {
    let err = create_vpc(&RegionUnavailable, &Conventions::default(), None)
        .await
        .expect_err("region lookup must fail");
    assert!(err.to_string().contains("credentials expired"), "got: {err}");
}

#[tokio::test]
async fn test_second_vpc_in_same_stack_collides() {
    let engine = test_engine();
    let conventions = Conventions::default();
    create_vpc(&engine, &conventions, None).await.expect("first");
    let err = create_vpc(&engine, &conventions, Some("10.1.0.0/16"))
        .await
        .expect_err("same name must collide");
    assert!(format!("{err:#}").contains("Duplicate resource URN"), "got: {err:#}");
}

// ── create_internet_gateway ───────────────────────────────────────────────────

#[tokio::test]
async fn test_gateway_attached_to_vpc() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let gateway = create_internet_gateway(&engine, &conventions, &vpc)
        .await
        .expect("gateway");

    assert_eq!(gateway.name, "test-stack - test-region");
    assert_eq!(
        gateway.vpc_id().resolve().await.expect("vpc id"),
        vpc.id.resolve().await.expect("id")
    );
    assert_eq!(
        gateway.tags().resolve().await.expect("tags"),
        expected_tags("test-stack")
    );
    let urn = gateway.urn.resolve().await.expect("urn");
    assert!(urn.contains(tokens::INTERNET_GATEWAY), "got: {urn}");
}

// ── create_subnet ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_public_subnet_scenario() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, Some("10.0.0.0/16"))
        .await
        .expect("vpc");
    let subnet = create_subnet(
        &engine,
        &conventions,
        "10.0.1.0/24",
        &vpc,
        "a",
        Visibility::Public,
    )
    .await
    .expect("subnet");

    let urn = subnet.urn.resolve().await.expect("urn");
    assert!(urn.contains("public - test-stack - test-regiona"), "got: {urn}");
    assert_eq!(subnet.cidr_block().resolve().await.expect("cidr"), "10.0.1.0/24");
    assert!(subnet.map_public_ip_on_launch().resolve().await.expect("map"));
    assert_eq!(
        subnet.availability_zone().resolve().await.expect("az"),
        "test-regiona"
    );
    assert_eq!(
        subnet.vpc_id().resolve().await.expect("vpc id"),
        vpc.id.resolve().await.expect("id")
    );
}

#[tokio::test]
async fn test_private_subnet_naming_and_addressing() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let subnet = create_subnet(
        &engine,
        &conventions,
        "10.0.2.0/24",
        &vpc,
        "b",
        Visibility::Private,
    )
    .await
    .expect("subnet");

    assert_eq!(subnet.name, "private - test-stack - test-regionb");
    assert!(!subnet.name.contains("public"));
    assert!(!subnet.map_public_ip_on_launch().resolve().await.expect("map"));
    assert_eq!(
        subnet.tags().resolve().await.expect("tags"),
        expected_tags("private - test-regionb")
    );
}

#[tokio::test]
async fn test_public_and_private_subnets_share_a_zone() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    for (cidr, visibility) in [
        ("10.0.1.0/24", Visibility::Public),
        ("10.0.2.0/24", Visibility::Private),
    ] {
        create_subnet(&engine, &conventions, cidr, &vpc, "a", visibility)
            .await
            .expect("distinct names must not collide");
    }
    assert_eq!(engine.registered_urns().len(), 3);
}

#[tokio::test]
async fn test_subnet_props_reject_when_vpc_id_rejects() {
    let engine = RejectingIds::new();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let subnet = create_subnet(&engine, &conventions, "10.0.1.0/24", &vpc, "a", Visibility::Public)
        .await
        .expect("declaration itself succeeds");
    let err = subnet.vpc_id().resolve().await.expect_err("vpc id never settles");
    assert!(err.to_string().contains("provider failed to create"), "got: {err}");
}

// ── create_route_table ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_route_table_has_single_default_route_through_gateway() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let gateway = create_internet_gateway(&engine, &conventions, &vpc)
        .await
        .expect("gateway");
    let route_table = create_route_table(&engine, &conventions, &vpc, &gateway)
        .await
        .expect("route table");

    let routes = route_table.routes().resolve().await.expect("routes");
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].cidr_block, "0.0.0.0/0");
    assert_eq!(routes[0].gateway_id, gateway.id.resolve().await.expect("gw id"));
    assert_eq!(
        route_table.tags().resolve().await.expect("tags"),
        expected_tags("test-stack")
    );
    assert_eq!(route_table.name, "test-stack - test-region");
}

// ── associations ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_association_named_from_subnet_and_route_table_urns() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let gateway = create_internet_gateway(&engine, &conventions, &vpc)
        .await
        .expect("gateway");
    let route_table = create_route_table(&engine, &conventions, &vpc, &gateway)
        .await
        .expect("route table");
    let subnet = create_subnet(&engine, &conventions, "10.0.1.0/24", &vpc, "a", Visibility::Public)
        .await
        .expect("subnet");

    let association = create_route_table_association(&engine, &route_table, &subnet)
        .await
        .expect("association");

    let subnet_urn = subnet.urn.resolve().await.expect("subnet urn");
    let route_table_urn = route_table.urn.resolve().await.expect("rt urn");
    assert_eq!(association.name, format!("{subnet_urn} -> {route_table_urn}"));
    assert_eq!(
        association.subnet_id().resolve().await.expect("subnet id"),
        subnet.id.resolve().await.expect("id")
    );
    assert_eq!(
        association.route_table_id().resolve().await.expect("rt id"),
        route_table.id.resolve().await.expect("id")
    );
}

#[tokio::test]
async fn test_main_association_named_after_route_table() {
    let engine = test_engine();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let gateway = create_internet_gateway(&engine, &conventions, &vpc)
        .await
        .expect("gateway");
    let route_table = create_route_table(&engine, &conventions, &vpc, &gateway)
        .await
        .expect("route table");

    let main = create_main_route_table_association(&engine, &route_table, &vpc)
        .await
        .expect("main association");

    let route_table_urn = route_table.urn.resolve().await.expect("rt urn");
    assert_eq!(main.name, format!("{route_table_urn} -> main"));
    assert_eq!(
        main.vpc_id().resolve().await.expect("vpc id"),
        vpc.id.resolve().await.expect("id")
    );
}

#[tokio::test]
async fn test_associations_fail_when_urns_never_settle() {
    let engine = WithholdingUrns::new();
    let conventions = Conventions::default();
    let vpc = create_vpc(&engine, &conventions, None).await.expect("vpc");
    let gateway = create_internet_gateway(&engine, &conventions, &vpc)
        .await
        .expect("gateway");
    let route_table = create_route_table(&engine, &conventions, &vpc, &gateway)
        .await
        .expect("route table");
    let subnet = create_subnet(&engine, &conventions, "10.0.1.0/24", &vpc, "a", Visibility::Public)
        .await
        .expect("subnet");
    let declared = engine.registered();

    let err = create_route_table_association(&engine, &route_table, &subnet)
        .await
        .expect_err("subnet urn is withheld");
    assert!(
        err.to_string().contains("urn for public - test-stack - test-regiona withheld"),
        "got: {err}"
    );

    let err = create_main_route_table_association(&engine, &route_table, &vpc)
        .await
        .expect_err("route table urn is withheld");
    assert!(
        err.to_string().contains("urn for test-stack - test-region withheld"),
        "got: {err}"
    );

    assert_eq!(engine.registered(), declared);
}
