macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::resource_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_fetch_method {
    ($client_name:ident, $entity:ty, $method:ident) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self) -> Result<Vec<$entity>, $crate::error::FetchError> {
                tracing::debug!("Sending request");
                let records = self.inner.fetch_all().await?;
                tracing::debug!(count = records.len(), "Response decoded");
                Ok(records)
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $method:ident) => {
        impl_client_new!($client_name, $entity);
        impl_fetch_method!($client_name, $entity, $method);
    };
}
