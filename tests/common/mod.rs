// Shared fixtures for agentscore integration tests
#![allow(dead_code)]

use agentscore::{Scenario, SolutionCode};
use indoc::indoc;

pub const SERVICE_PY: &str = indoc! {r#"
    """User service with a small read-through cache."""
    import os
    import json
    from repository import UserRepository

    class UserService:
        def __init__(self, repository=None):
            self.repository = repository or UserRepository("users.json")
            self.cache = {}

        def export(self, user_id):
            return json.dumps(self.get_user(user_id))

        def get_user(self, user_id):
            if user_id in self.cache:
                return self.cache[user_id]
            user = self.repository.find(user_id)
            self.cache[user_id] = user
            return user

        def update_user(self, user_id, data):
            self.validate(data)
            self.cache.pop(user_id, None)
            return self.repository.save(user_id, data)

        def validate(self, data):
            if not isinstance(data, dict):
                raise ValueError("invalid payload")
"#};

pub const REPOSITORY_PY: &str = indoc! {r#"
    # Persistence layer
    import json

    class UserRepository:
        def __init__(self, path):
            self.path = path

        def find(self, user_id):
            return load_user(self.path, user_id)

        def save(self, user_id, data):
            return write_user(self.path, user_id, json.dumps(data))

    def load_user(path, user_id):
        return None

    def write_user(path, user_id, payload):
        return True
"#};

pub const HANDLER_GO: &str = indoc! {r#"
    package api

    import "net/http"

    // UserReader abstracts user lookups.
    type UserReader interface {
        GetUser(id string) (User, error)
    }

    type Handler struct {
        users UserReader
    }

    func NewHandler(users UserReader) *Handler {
        return &Handler{users: users}
    }

    func (h *Handler) GetUser(w http.ResponseWriter, r *http.Request) {
        user, err := h.users.GetUser(r.URL.Query().Get("id"))
        if err != nil {
            http.Error(w, err.Error(), http.StatusNotFound)
            return
        }
        writeJSON(w, user)
    }
"#};

pub fn python_solution() -> SolutionCode {
    SolutionCode::new()
        .with_file("service.py", SERVICE_PY)
        .with_file("repository.py", REPOSITORY_PY)
}

pub fn go_solution() -> SolutionCode {
    SolutionCode::new().with_file("api/handler.go", HANDLER_GO)
}

pub fn caching_scenario(category: &str) -> Scenario {
    Scenario::new("Add caching to UserService and update the repository")
        .with_description("The service should avoid repeated lookups")
        .with_category(category)
        .with_context_files(["src/repository.py", "src/service.py"])
}

pub fn assert_unit_interval(label: &str, value: f64) {
    assert!(
        (0.0..=1.0).contains(&value),
        "{label} out of range: {value}"
    );
}
