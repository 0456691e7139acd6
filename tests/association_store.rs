mod common;

use common::{test_stores, workflow};
use workflow_assoc::{EventAssociation, TemplateCatalog, Workflow};

const LEAVE_EVENT: &str = "USER_LEAVE_REQUEST";

#[tokio::test]
async fn leave_request_resolves_only_for_owning_tenant() {
    let stores = test_stores().await;
    let wf = Workflow {
        id: "wf-1".to_string(),
        name: "Leave Approval".to_string(),
        description: "Approve leave requests".to_string(),
        template_id: "tpl-1".to_string(),
        template_impl_id: "impl-1".to_string(),
        tenant_id: 1,
    };
    stores.workflows.create(&wf).await.unwrap();
    stores.parameters.set_all("wf-1", [("approver", "manager")]).await.unwrap();
    stores
        .associations
        .create("leave-assoc", "wf-1", LEAVE_EVENT, "true")
        .await
        .unwrap();

    let resolved = stores.associations.resolve_for_event(LEAVE_EVENT, 1).await.unwrap();
    assert_eq!(
        resolved,
        vec![EventAssociation {
            condition: "true".to_string(),
            workflow_id: "wf-1".to_string(),
            template_id: "tpl-1".to_string(),
            template_impl_id: "impl-1".to_string(),
        }]
    );

    assert!(stores.associations.resolve_for_event(LEAVE_EVENT, 2).await.unwrap().is_empty());
}

#[tokio::test]
async fn resolve_never_crosses_tenants() {
    let stores = test_stores().await;
    let events = ["ADD_USER", "ADD_ROLE", "DELETE_USER"];

    for tenant in 1..=3 {
        let id = format!("wf-t{tenant}");
        stores.workflows.create(&workflow(&id, tenant)).await.unwrap();
        for event in events {
            stores
                .associations
                .create(&format!("{id}-{event}"), &id, event, &format!("tenant == {tenant}"))
                .await
                .unwrap();
        }
    }

    for tenant in 1..=4 {
        for event in events.iter().chain(["UNKNOWN_EVENT"].iter()) {
            let resolved = stores.associations.resolve_for_event(event, tenant).await.unwrap();
            for row in &resolved {
                assert_eq!(row.workflow_id, format!("wf-t{tenant}"));
                assert_eq!(row.condition, format!("tenant == {tenant}"));
            }
            let expected = usize::from(tenant <= 3 && *event != "UNKNOWN_EVENT");
            assert_eq!(resolved.len(), expected, "tenant {tenant}, event {event}");
        }
    }
}

#[tokio::test]
async fn event_can_bind_several_workflows() {
    let stores = test_stores().await;
    stores.workflows.create(&workflow("wf-a", 1)).await.unwrap();
    stores.workflows.create(&workflow("wf-b", 1)).await.unwrap();
    stores.associations.create("a", "wf-a", "ADD_USER", "role == 'admin'").await.unwrap();
    stores.associations.create("b", "wf-b", "ADD_USER", "true").await.unwrap();

    let workflow_ids: Vec<String> = stores
        .associations
        .resolve_for_event("ADD_USER", 1)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.workflow_id)
        .collect();
    assert_eq!(workflow_ids, vec!["wf-a", "wf-b"]);
}

#[tokio::test]
async fn list_for_workflow_includes_workflow_name() {
    let stores = test_stores().await;
    stores.workflows.create(&workflow("wf-1", 1)).await.unwrap();
    stores.workflows.create(&workflow("wf-2", 1)).await.unwrap();
    let first = stores.associations.create("on-add", "wf-1", "ADD_USER", "true").await.unwrap();
    let second = stores.associations.create("on-role", "wf-1", "ADD_ROLE", "false").await.unwrap();
    stores.associations.create("other", "wf-2", "ADD_USER", "true").await.unwrap();

    let listed = stores.associations.list_for_workflow("wf-1").await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[0].name, "on-add");
    assert_eq!(listed[0].event_id, "ADD_USER");
    assert_eq!(listed[0].condition, "true");
    assert_eq!(listed[0].workflow_name, "wf-1 name");
    assert_eq!(listed[1].id, second);
    assert_eq!(listed[1].condition, "false");

    assert!(stores.associations.list_for_workflow("wf-none").await.unwrap().is_empty());
}

#[tokio::test]
async fn list_all_spans_every_tenant() {
    let stores = test_stores().await;
    stores.workflows.create(&workflow("wf-1", 1)).await.unwrap();
    stores.workflows.create(&workflow("wf-2", 2)).await.unwrap();
    stores.associations.create("one", "wf-1", "ADD_USER", "true").await.unwrap();
    stores.associations.create("two", "wf-2", "ADD_USER", "true").await.unwrap();

    let names: Vec<String> = stores
        .associations
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.workflow_name)
        .collect();
    assert_eq!(names, vec!["wf-1 name", "wf-2 name"]);
}

#[tokio::test]
async fn remove_association_is_idempotent() {
    let stores = test_stores().await;
    stores.workflows.create(&workflow("wf-1", 1)).await.unwrap();
    let id = stores.associations.create("on-add", "wf-1", "ADD_USER", "true").await.unwrap();

    stores.associations.remove(id).await.unwrap();
    stores.associations.remove(id).await.unwrap();
    stores.associations.remove(9_999).await.unwrap();

    assert!(stores.associations.list_all().await.unwrap().is_empty());
    assert!(stores.associations.resolve_for_event("ADD_USER", 1).await.unwrap().is_empty());
}

#[tokio::test]
async fn removed_workflow_disappears_from_every_lookup() {
    let stores = test_stores().await;
    let catalog = TemplateCatalog::new();
    stores.workflows.create(&workflow("wf-1", 1)).await.unwrap();
    stores.parameters.set_all("wf-1", [("approver", "manager")]).await.unwrap();
    stores.associations.create("on-add", "wf-1", "ADD_USER", "true").await.unwrap();

    stores.workflows.remove("wf-1").await.unwrap();

    assert!(stores.workflows.list(1, &catalog).await.unwrap().is_empty());
    assert!(stores.associations.resolve_for_event("ADD_USER", 1).await.unwrap().is_empty());
    assert!(stores.associations.list_for_workflow("wf-1").await.unwrap().is_empty());
    assert!(stores.associations.list_all().await.unwrap().is_empty());
    assert!(stores.parameters.get_all("wf-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn association_requires_existing_workflow() {
    let stores = test_stores().await;
    let err = stores
        .associations
        .create("dangling", "wf-missing", "ADD_USER", "true")
        .await
        .unwrap_err();
    assert!(matches!(err.cause(), sqlx::Error::Database(_)));
}
