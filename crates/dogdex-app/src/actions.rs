//! Action handlers: execute side effects against the dog service
//!
//! Every action runs as its own tokio task and reports back with exactly
//! one [`Message`] over the channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use dogdex_api::DogService;
use dogdex_core::prelude::*;
use dogdex_core::{Dog, ViewMode};

use crate::fetch::FetchPlan;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Spawn `action` in the background and send its result to `msg_tx`
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: DogService + Sync + 'static,
{
    tokio::spawn(async move {
        let message = execute_action(action, service.as_ref()).await;
        if msg_tx.send(message).await.is_err() {
            debug!("Message channel closed, dropping action result");
        }
    });
}

/// Run `action` to completion and produce the resulting message
pub async fn execute_action<S>(action: UpdateAction, service: &S) -> Message
where
    S: DogService + Sync,
{
    match action {
        UpdateAction::Login { name, email } => match service.login(&name, &email).await {
            Ok(()) => Message::LoginSucceeded { name },
            Err(e) => Message::LoginFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::Logout => Message::LoggedOut {
            error: service.logout().await.err().map(|e| e.to_string()),
        },

        UpdateAction::LoadBreeds => match service.breeds().await {
            Ok(breeds) => Message::BreedsLoaded { breeds },
            Err(e) => Message::BreedsFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::Fetch(plan) => execute_fetch(plan, service).await,

        UpdateAction::FindMatch { ids } => match service.find_match(&ids).await {
            Ok(id) => Message::MatchFound { id },
            Err(e) => Message::MatchFailed {
                error: e.to_string(),
                session_expired: e.is_auth(),
            },
        },
    }
}

async fn execute_fetch<S>(plan: FetchPlan, service: &S) -> Message
where
    S: DogService + Sync,
{
    let request_id = plan.request_id();
    let result = match plan {
        FetchPlan::Search { query, .. } => match service.search(&query).await {
            Ok(page) => hydrate(service, &page.result_ids)
                .await
                .map(|dogs| (ViewMode::Breed, dogs, page.total)),
            Err(e) => Err(e),
        },
        FetchPlan::Hydrate {
            mode, ids, total, ..
        } => hydrate(service, &ids)
            .await
            .map(|dogs| (mode, dogs, total)),
        FetchPlan::Clear { mode, .. } => Ok((mode, Vec::new(), 0)),
    };

    match result {
        Ok((mode, dogs, total)) => Message::FetchCompleted {
            request_id,
            mode,
            dogs,
            total,
        },
        Err(e) => Message::FetchFailed {
            request_id,
            error: e.to_string(),
            session_expired: e.is_auth(),
        },
    }
}

/// Batch-fetch records; an empty id list skips the request
async fn hydrate<S>(service: &S, ids: &[String]) -> Result<Vec<Dog>>
where
    S: DogService + Sync,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    service.dogs(ids).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogdex_api::test_utils::{test_dog, ApiCall, FailPoint, FakeDogService};
    use dogdex_api::SearchQuery;
    use dogdex_core::SortOrder;

    use crate::fetch::RequestId;

    fn kennel() -> FakeDogService {
        FakeDogService::with_dogs(vec![
            test_dog("1", "Rex", "Pug"),
            test_dog("2", "Bo", "Beagle"),
            test_dog("3", "Max", "Pug"),
        ])
    }

    #[tokio::test]
    async fn test_login_success_and_failure() {
        let fake = kennel();
        let msg = execute_action(
            UpdateAction::Login {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
            &fake,
        )
        .await;
        assert_eq!(msg, Message::LoginSucceeded { name: "Ada".into() });

        fake.fail_on(FailPoint::Login);
        let msg = execute_action(
            UpdateAction::Login {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
            &fake,
        )
        .await;
        assert!(matches!(msg, Message::LoginFailed { .. }));
    }

    #[tokio::test]
    async fn test_search_then_hydrate() {
        let fake = kennel();
        let plan = FetchPlan::Search {
            request_id: RequestId(4),
            query: SearchQuery {
                breed: Some("Pug".into()),
                size: 50,
                from: 0,
                order: SortOrder::Asc,
            },
        };
        let msg = execute_action(UpdateAction::Fetch(plan), &fake).await;
        match msg {
            Message::FetchCompleted {
                request_id,
                mode,
                dogs,
                total,
            } => {
                assert_eq!(request_id, RequestId(4));
                assert_eq!(mode, ViewMode::Breed);
                assert_eq!(total, 2);
                let ids: Vec<_> = dogs.iter().map(|d| d.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "3"]);
            }
            other => panic!("unexpected message {other:?}"),
        }
        assert_eq!(fake.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_search_skips_hydration() {
        let fake = kennel();
        let plan = FetchPlan::Search {
            request_id: RequestId(1),
            query: SearchQuery {
                breed: Some("Akita".into()),
                size: 50,
                from: 0,
                order: SortOrder::Asc,
            },
        };
        let msg = execute_action(UpdateAction::Fetch(plan), &fake).await;
        assert!(matches!(msg, Message::FetchCompleted { total: 0, .. }));
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_hydrate_failure_reports_request_id() {
        let fake = kennel();
        fake.fail_on(FailPoint::Dogs);
        let plan = FetchPlan::Hydrate {
            request_id: RequestId(9),
            mode: ViewMode::Favorites,
            ids: vec!["1".into()],
            total: 1,
        };
        let msg = execute_action(UpdateAction::Fetch(plan), &fake).await;
        assert!(matches!(
            msg,
            Message::FetchFailed {
                request_id: RequestId(9),
                session_expired: false,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_rejected_cookie_marks_failure_as_expired() {
        let fake = kennel();
        fake.expire_session();
        let plan = FetchPlan::Hydrate {
            request_id: RequestId(4),
            mode: ViewMode::Favorites,
            ids: vec!["1".into()],
            total: 1,
        };
        let msg = execute_action(UpdateAction::Fetch(plan), &fake).await;
        assert!(matches!(
            msg,
            Message::FetchFailed {
                session_expired: true,
                ..
            }
        ));

        let msg = execute_action(UpdateAction::FindMatch { ids: vec!["1".into()] }, &fake).await;
        assert!(matches!(
            msg,
            Message::MatchFailed {
                session_expired: true,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_breeds_failure_message() {
        let fake = kennel();
        fake.fail_on(FailPoint::Breeds);
        let msg = execute_action(UpdateAction::LoadBreeds, &fake).await;
        assert!(matches!(msg, Message::BreedsFailed { .. }));
    }

    #[tokio::test]
    async fn test_find_match_sends_favorites() {
        let fake = kennel();
        fake.set_match("3");
        let ids = vec!["1".to_string(), "3".to_string()];
        let msg = execute_action(UpdateAction::FindMatch { ids: ids.clone() }, &fake).await;
        assert_eq!(msg, Message::MatchFound { id: "3".into() });
        assert_eq!(fake.calls(), vec![ApiCall::Match(ids)]);
    }

    #[tokio::test]
    async fn test_handle_action_reports_over_channel() {
        let fake = Arc::new(kennel());
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(UpdateAction::LoadBreeds, tx, fake);
        let msg = rx.recv().await.unwrap();
        assert_eq!(
            msg,
            Message::BreedsLoaded {
                breeds: vec!["Beagle".into(), "Pug".into()]
            }
        );
    }
}
