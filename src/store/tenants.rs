//! In-memory session store for tenant records

use crate::api::UpkeepApi;
use crate::error::{Error, ValidationError};
use crate::id;
use crate::model::{NewTenant, Tenant};
use crate::store::RemoteWrite;

/// Session-local collection of tenant records.
///
/// Tenants are listed unfiltered; the mutations are create, move (apartment
/// change), and remove, each applied optimistically.
pub struct TenantStore {
    api: UpkeepApi,
    tenants: Vec<Tenant>,
}

impl TenantStore {
    /// Create a new TenantStore
    pub(crate) fn new(api: UpkeepApi) -> Self {
        Self {
            api,
            tenants: Vec::new(),
        }
    }

    /// Replace the in-memory collection
    pub fn load(&mut self, collection: Vec<Tenant>) {
        self.tenants = collection;
    }

    /// Hydrate from the backend's full tenant collection
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let collection = self.api.tenants().await?;
        self.load(collection);
        Ok(())
    }

    /// The in-memory collection
    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    /// Look up a tenant by id
    pub fn get(&self, tenant_id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.tenant_id == tenant_id)
    }

    /// Validate and submit a new tenant record.
    ///
    /// All six fields are required. On success the record gets a generated
    /// id, is prepended to the collection, and the create request is
    /// dispatched; the optimistic record stands regardless of the remote
    /// outcome. On validation failure nothing is mutated and no remote call
    /// is made.
    pub fn create(&mut self, new: NewTenant) -> Result<(Tenant, RemoteWrite), ValidationError> {
        let mut errors = ValidationError::new();
        errors.require("name", &new.name, "Name is required");
        errors.require("phone", &new.phone, "Phone number is required");
        errors.require("email", &new.email, "Email is required");
        errors.require("checkin", &new.check_in, "Check in date is required");
        errors.require("checkout", &new.check_out, "Check out date is required");
        errors.require(
            "apartmentnumber",
            &new.apartment_number,
            "Apartment number is required",
        );
        errors.into_result()?;

        let tenant = Tenant {
            tenant_id: id::tenant_id(),
            name: new.name,
            phone: new.phone,
            email: new.email,
            check_in: new.check_in,
            check_out: new.check_out,
            apartment_number: new.apartment_number,
        };
        self.tenants.insert(0, tenant.clone());

        let api = self.api.clone();
        let payload = tenant.clone();
        let write = RemoteWrite::spawn("add tenant", async move {
            api.add_tenant(&payload).await
        });
        Ok((tenant, write))
    }

    /// Move a tenant to a new apartment.
    ///
    /// Any string is accepted for the new apartment number. An id with no
    /// matching record leaves the collection unchanged; the remote update is
    /// dispatched either way.
    pub fn move_apartment(&mut self, tenant_id: &str, new_apartment: &str) -> RemoteWrite {
        if let Some(tenant) = self
            .tenants
            .iter_mut()
            .find(|tenant| tenant.tenant_id == tenant_id)
        {
            tenant.apartment_number = new_apartment.to_string();
        }

        let api = self.api.clone();
        let tenant_id = tenant_id.to_string();
        let new_apartment = new_apartment.to_string();
        RemoteWrite::spawn("update tenant apartment", async move {
            api.update_tenant_apartment(&tenant_id, &new_apartment).await
        })
    }

    /// Remove a tenant record.
    ///
    /// The removal is optimistic and unconditional; removing an id that is
    /// already gone is a no-op locally. The remote delete is dispatched
    /// either way.
    pub fn remove(&mut self, tenant_id: &str) -> RemoteWrite {
        self.tenants.retain(|tenant| tenant.tenant_id != tenant_id);

        let api = self.api.clone();
        let tenant_id = tenant_id.to_string();
        RemoteWrite::spawn("remove tenant", async move {
            api.remove_tenant(&tenant_id).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;

    fn offline_store() -> TenantStore {
        TenantStore::new(UpkeepApi::new("http://127.0.0.1:9", Client::new(), None))
    }

    fn tenant(id: &str, apartment: &str) -> Tenant {
        Tenant {
            tenant_id: id.to_string(),
            name: "Alice".to_string(),
            phone: "555-0100".to_string(),
            email: "alice@example.com".to_string(),
            check_in: "2025-01-01".to_string(),
            check_out: "2025-06-01".to_string(),
            apartment_number: apartment.to_string(),
        }
    }

    fn valid_form() -> NewTenant {
        NewTenant {
            name: "Alice".to_string(),
            phone: "555-0100".to_string(),
            email: "alice@example.com".to_string(),
            check_in: "2025-01-01".to_string(),
            check_out: "2025-06-01".to_string(),
            apartment_number: "10".to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_each_missing_field_individually() {
        let cases: Vec<(&str, Box<dyn Fn(&mut NewTenant)>, &str)> = vec![
            ("name", Box::new(|f| f.name.clear()), "Name is required"),
            ("phone", Box::new(|f| f.phone.clear()), "Phone number is required"),
            ("email", Box::new(|f| f.email.clear()), "Email is required"),
            ("checkin", Box::new(|f| f.check_in.clear()), "Check in date is required"),
            ("checkout", Box::new(|f| f.check_out.clear()), "Check out date is required"),
            (
                "apartmentnumber",
                Box::new(|f| f.apartment_number.clear()),
                "Apartment number is required",
            ),
        ];

        for (field, clear, message) in cases {
            let mut store = offline_store();
            let mut form = valid_form();
            clear(&mut form);

            let errors = store.create(form).err().unwrap();
            assert_eq!(errors.len(), 1, "field {}", field);
            assert_eq!(errors.message(field), Some(message));
            assert!(store.tenants().is_empty(), "field {}", field);
        }
    }

    #[tokio::test]
    async fn create_prepends_a_record_with_a_generated_id() {
        let mut store = offline_store();
        store.load(vec![tenant("0001", "5")]);

        let (created, _write) = store.create(valid_form()).unwrap();
        assert_eq!(store.tenants()[0].tenant_id, created.tenant_id);
        assert_eq!(store.tenants().len(), 2);
        assert_eq!(created.tenant_id.len(), 4);
        assert!(created.tenant_id.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn move_apartment_updates_only_the_matching_tenant() {
        let mut store = offline_store();
        store.load(vec![tenant("0001", "5"), tenant("0002", "7")]);

        store.move_apartment("0001", "12B");

        assert_eq!(store.get("0001").unwrap().apartment_number, "12B");
        assert_eq!(store.get("0002").unwrap().apartment_number, "7");
    }

    #[tokio::test]
    async fn remove_twice_is_a_no_op_the_second_time() {
        let mut store = offline_store();
        store.load(vec![tenant("0001", "5"), tenant("0002", "7")]);

        store.remove("0001");
        assert_eq!(store.tenants().len(), 1);

        store.remove("0001");
        assert_eq!(store.tenants().len(), 1);
        assert!(store.get("0002").is_some());
    }

    #[tokio::test]
    async fn remove_failure_does_not_restore_the_record() {
        let mut store = offline_store();
        store.load(vec![tenant("0001", "5")]);

        let write = store.remove("0001");
        assert!(write.wait().await.is_err());
        assert!(store.tenants().is_empty());
    }
}
