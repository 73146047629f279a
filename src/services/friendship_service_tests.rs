// src/services/friendship_service_tests.rs
//
// Request / confirm lifecycle

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::{FriendshipStatus, NewUser, UserId};
    use crate::error::ErrorKind;
    use crate::repositories::{InMemoryFriendshipRepository, InMemoryUserRepository};
    use crate::services::{FriendshipService, UserService};

    fn services() -> (FriendshipService, UserService) {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let ledger = Arc::new(InMemoryFriendshipRepository::new());
        (
            FriendshipService::new(ledger.clone(), user_repo.clone()),
            UserService::new(user_repo, ledger),
        )
    }

    fn register(users: &UserService, login: &str) -> UserId {
        users
            .add_user(NewUser {
                email: format!("{}@ya.ru", login),
                login: login.to_string(),
                name: None,
                birthday: NaiveDate::from_ymd_opt(2000, 2, 29),
            })
            .unwrap()
            .id
            .unwrap()
    }

    #[test]
    fn test_send_then_confirm() {
        let (friendships, users) = services();
        let sender = register(&users, "sender");
        let receiver = register(&users, "receiver");

        let request = friendships.send_request(sender, receiver).unwrap();
        assert_eq!(request.status, FriendshipStatus::Pending);
        assert_eq!(request.requester_id, sender);
        assert_eq!(request.recipient_id, receiver);
        assert!(friendships.friend_ids(sender).unwrap().is_empty());

        let again = friendships.send_request(sender, receiver).unwrap_err();
        assert_eq!(again.to_string(), "request already exists");

        let wrong_side = friendships.confirm_request(sender, receiver).unwrap_err();
        assert_eq!(wrong_side.kind(), ErrorKind::Validation);
        assert_eq!(
            wrong_side.to_string(),
            "only the recipient can confirm a friendship request"
        );

        let confirmed = friendships.confirm_request(receiver, sender).unwrap();
        assert_eq!(confirmed.status, FriendshipStatus::Confirmed);
        assert_eq!(friendships.friend_ids(sender).unwrap(), vec![receiver]);
        assert_eq!(friendships.friend_ids(receiver).unwrap(), vec![sender]);
    }

    #[test]
    fn test_confirm_twice_is_rejected() {
        let (friendships, users) = services();
        let sender = register(&users, "sender");
        let receiver = register(&users, "receiver");
        friendships.send_request(sender, receiver).unwrap();
        friendships.confirm_request(receiver, sender).unwrap();

        let err = friendships.confirm_request(receiver, sender).unwrap_err();
        assert_eq!(err.to_string(), "request already processed");
    }

    #[test]
    fn test_reverse_request_blocked_by_existing_record() {
        let (friendships, users) = services();
        let a = register(&users, "a");
        let b = register(&users, "b");
        friendships.send_request(a, b).unwrap();

        assert_eq!(
            friendships.send_request(b, a).unwrap_err().to_string(),
            "request already exists"
        );
    }

    #[test]
    fn test_direct_friendship_blocks_request() {
        let (friendships, users) = services();
        let a = register(&users, "a");
        let b = register(&users, "b");
        users.add_friend(a, b).unwrap();

        assert_eq!(
            friendships.send_request(b, a).unwrap_err().to_string(),
            "request already exists"
        );
    }

    #[test]
    fn test_confirm_without_request_is_not_found() {
        let (friendships, users) = services();
        let a = register(&users, "a");
        let b = register(&users, "b");

        let err = friendships.confirm_request(b, a).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            format!("friendship request between {} and {} not found", b, a)
        );
    }

    #[test]
    fn test_send_request_validation() {
        let (friendships, users) = services();
        let a = register(&users, "a");

        assert_eq!(
            friendships.send_request(a, a).unwrap_err().to_string(),
            "user cannot befriend themselves"
        );
        assert_eq!(
            friendships.send_request(a, 404).unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            friendships.friend_ids(404).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_crossed_requests_leave_one_record() {
        use crate::repositories::FriendshipRepository;
        use std::sync::Barrier;

        for _ in 0..200 {
            let user_repo = Arc::new(InMemoryUserRepository::new());
            let ledger = Arc::new(InMemoryFriendshipRepository::new());
            let friendships = FriendshipService::new(ledger.clone(), user_repo.clone());
            let users = UserService::new(user_repo, ledger.clone());
            let a = register(&users, "a");
            let b = register(&users, "b");
            let barrier = Barrier::new(2);

            let outcomes: Vec<bool> = std::thread::scope(|scope| {
                let handles = [(a, b), (b, a)].map(|(from, to)| {
                    let (friendships, barrier) = (&friendships, &barrier);
                    scope.spawn(move || {
                        barrier.wait();
                        friendships.send_request(from, to).is_ok()
                    })
                });
                handles.into_iter().map(|h| h.join().unwrap()).collect()
            });

            assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
            assert_eq!(ledger.find_by_user_id(a).unwrap().len(), 1);
        }
    }

    #[test]
    fn test_request_racing_direct_add_leaves_one_record() {
        use crate::repositories::FriendshipRepository;
        use std::sync::Barrier;

        for _ in 0..200 {
            let user_repo = Arc::new(InMemoryUserRepository::new());
            let ledger = Arc::new(InMemoryFriendshipRepository::new());
            let friendships = FriendshipService::new(ledger.clone(), user_repo.clone());
            let users = UserService::new(user_repo, ledger.clone());
            let a = register(&users, "a");
            let b = register(&users, "b");
            let barrier = Barrier::new(2);

            std::thread::scope(|scope| {
                scope.spawn(|| {
                    barrier.wait();
                    let _ = friendships.send_request(a, b);
                });
                scope.spawn(|| {
                    barrier.wait();
                    users.add_friend(b, a).unwrap();
                });
            });

            let records = ledger.find_by_user_id(a).unwrap();
            assert_eq!(records.len(), 1);
            assert!(records[0].is_confirmed());
        }
    }
}
