#![deny(missing_docs)]

//! # Route Registration
//!
//! Registers every domain endpoint onto the original application. This is
//! the registration collaborator the bridge runs exactly once per process;
//! it is also the declaration source the generator scans, so every path
//! here is a plain string literal.

use crate::bridge::{App, SyntheticRequest, SyntheticResponse};
use crate::domain::error::DomainError;
use crate::domain::services::{
    FundTransferService, MaterialService, ProjectService, SupplierService, WorkerService,
};
use crate::domain::storage::Storage;
use crate::domain::Envelope;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

fn fail(res: &SyntheticResponse, err: &DomainError) {
    let body = serde_json::to_value(Envelope::<()>::fail(err.to_string())).unwrap_or(Value::Null);
    res.status(err.status()).json(body);
}

fn respond<T: Serialize>(
    res: &SyntheticResponse,
    ok_status: u16,
    outcome: Result<Envelope<T>, DomainError>,
) {
    match outcome {
        Ok(envelope) => {
            let body = serde_json::to_value(envelope).unwrap_or(Value::Null);
            res.status(ok_status).json(body);
        }
        Err(err) => fail(res, &err),
    }
}

fn path_param(req: &SyntheticRequest, name: &str) -> Result<String, DomainError> {
    req.param(name)
        .map(str::to_string)
        .ok_or_else(|| DomainError::Validation(format!("missing path parameter: {}", name)))
}

/// Registers the full domain route table onto `app` and hands it back.
pub async fn register_routes(mut app: App, storage: Arc<dyn Storage>) -> App {
    let projects = ProjectService::new(Arc::clone(&storage));
    let workers = WorkerService::new(Arc::clone(&storage));
    let suppliers = SupplierService::new(Arc::clone(&storage));
    let transfers = FundTransferService::new(Arc::clone(&storage));
    let materials = MaterialService::new(Arc::clone(&storage));

    app.get("/api/health", |_req, res, _next| {
        Box::pin(async move {
            res.json(json!({ "status": "ok", "message": "server is running" }));
            Ok(())
        })
    });

    {
        let svc = projects.clone();
        app.get("/api/projects", move |_req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 200, svc.list().await);
                Ok(())
            })
        });
    }
    {
        let svc = projects.clone();
        app.post("/api/projects", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 201, svc.create(req.body.clone()).await);
                Ok(())
            })
        });
    }
    {
        let svc = projects.clone();
        app.get("/api/projects/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.get(&id).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }
    {
        let svc = projects.clone();
        app.put("/api/projects/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.update(&id, req.body.clone()).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }
    {
        let svc = projects.clone();
        app.delete("/api/projects/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.delete(&id).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }

    {
        let svc = workers.clone();
        app.get("/api/workers", move |_req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 200, svc.list().await);
                Ok(())
            })
        });
    }
    {
        let svc = workers.clone();
        app.post("/api/workers", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 201, svc.create(req.body.clone()).await);
                Ok(())
            })
        });
    }
    {
        let svc = workers.clone();
        app.put("/api/workers/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.update(&id, req.body.clone()).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }
    {
        let svc = workers.clone();
        app.delete("/api/workers/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.delete(&id).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }

    {
        let svc = suppliers.clone();
        app.get("/api/suppliers", move |_req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 200, svc.list().await);
                Ok(())
            })
        });
    }
    {
        let svc = suppliers.clone();
        app.post("/api/suppliers", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 201, svc.create(req.body.clone()).await);
                Ok(())
            })
        });
    }
    {
        let svc = suppliers.clone();
        app.put("/api/suppliers/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.update(&id, req.body.clone()).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }
    {
        let svc = suppliers.clone();
        app.delete("/api/suppliers/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.delete(&id).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }

    {
        let svc = transfers.clone();
        app.get("/api/fund-transfers", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                let project_id = req.query_param("projectId").map(str::to_string);
                let date = req.query_param("date").map(str::to_string);
                respond(&res, 200, svc.list(project_id.as_deref(), date.as_deref()).await);
                Ok(())
            })
        });
    }
    {
        let svc = transfers.clone();
        app.post("/api/fund-transfers", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 201, svc.create(req.body.clone()).await);
                Ok(())
            })
        });
    }
    {
        let svc = transfers.clone();
        app.put("/api/fund-transfers/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.update(&id, req.body.clone()).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }
    {
        let svc = transfers.clone();
        app.delete("/api/fund-transfers/:id", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                match path_param(&req, "id") {
                    Ok(id) => respond(&res, 200, svc.delete(&id).await),
                    Err(err) => fail(&res, &err),
                }
                Ok(())
            })
        });
    }

    {
        let svc = materials.clone();
        app.get("/api/materials", move |_req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 200, svc.list().await);
                Ok(())
            })
        });
    }
    {
        let svc = materials.clone();
        app.post("/api/materials", move |req, res, _next| {
            let svc = svc.clone();
            Box::pin(async move {
                respond(&res, 201, svc.create(req.body.clone()).await);
                Ok(())
            })
        });
    }

    app
}
