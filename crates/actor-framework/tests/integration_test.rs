use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    label: String,
    units: u32,
    sealed: bool,
}

#[derive(Debug)]
struct BinCreate {
    label: String,
    units: u32,
}

#[derive(Debug)]
struct BinUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum BinAction {
    Take(u32),
    Seal,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum BinError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("cannot take {requested}, only {available} left")]
    Short { requested: u32, available: u32 },
    #[error("bin is sealed")]
    Sealed,
}

#[async_trait]
impl ActorEntity for Bin {
    type Id = u32;
    type Create = BinCreate;
    type Update = BinUpdate;
    type Action = BinAction;
    type ActionResult = u32;
    type Context = ();
    type Error = BinError;

    fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(BinError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            units: params.units,
            sealed: false,
        })
    }

    async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.sealed {
            return Err(BinError::Sealed);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BinAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            BinAction::Take(requested) => {
                if requested > self.units {
                    return Err(BinError::Short {
                        requested,
                        available: self.units,
                    });
                }
                self.units -= requested;
                Ok(self.units)
            }
            BinAction::Seal => {
                self.sealed = true;
                Ok(self.units)
            }
        }
    }
}

fn bin(label: &str, units: u32) -> BinCreate {
    BinCreate {
        label: label.into(),
        units,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(bin("A1", 10)).await.unwrap();
    assert_eq!(id, 1);

    // 2. Action
    let left = client.perform_action(id, BinAction::Take(4)).await.unwrap();
    assert_eq!(left, 6);

    let stored: Bin = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.units, 6);

    // 3. Update
    let updated = client
        .update(
            id,
            BinUpdate {
                label: Some("A2".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "A2");

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_does_not_consume_an_id() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    assert_eq!(client.create(bin("A1", 1)).await.unwrap(), 1);

    let err = client.create(bin("", 1)).await.unwrap_err();
    assert_eq!(err.downcast_entity::<BinError>().unwrap(), BinError::EmptyLabel);

    assert_eq!(client.create(bin("A2", 1)).await.unwrap(), 2);
}

#[tokio::test]
async fn test_seeded_entity_is_served_and_ids_continue() {
    let (mut actor, client) = ResourceActor::<Bin>::new(10);
    let seeded = actor.seed(|id| Bin {
        id,
        label: "house".into(),
        units: 0,
        sealed: true,
    });
    tokio::spawn(actor.run(()));

    assert_eq!(seeded, 1);
    let stored = client.get(seeded).await.unwrap().unwrap();
    assert_eq!(stored.label, "house");
    assert!(stored.sealed);

    assert_eq!(client.create(bin("A1", 1)).await.unwrap(), 2);
}

#[tokio::test]
async fn test_list_returns_entities_in_id_order() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["first", "second", "third"] {
        client.create(bin(label, 1)).await.unwrap();
    }

    let labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.label)
        .collect();
    assert_eq!(labels, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_failed_action_leaves_entity_unchanged() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(bin("A1", 3)).await.unwrap();
    let err = client
        .perform_action(id, BinAction::Take(5))
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<BinError>().unwrap(),
        BinError::Short {
            requested: 5,
            available: 3
        }
    );
    assert_eq!(client.get(id).await.unwrap().unwrap().units, 3);
}

#[tokio::test]
async fn test_on_delete_can_veto_removal() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(bin("A1", 3)).await.unwrap();
    client.perform_action(id, BinAction::Seal).await.unwrap();

    let err = client.delete(id).await.unwrap_err();
    assert_eq!(err.downcast_entity::<BinError>().unwrap(), BinError::Sealed);
    assert!(client.get(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .perform_action(42, BinAction::Take(1))
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let (actor, client) = ResourceActor::<Bin>::new(64);
    tokio::spawn(actor.run(()));

    let id = client.create(bin("A1", 10)).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..25 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.perform_action(id, BinAction::Take(1)).await
        }));
    }

    let mut taken = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            taken += 1;
        }
    }

    assert_eq!(taken, 10);
    assert_eq!(client.get(id).await.unwrap().unwrap().units, 0);
}

#[tokio::test]
async fn test_client_after_shutdown_reports_closed() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
