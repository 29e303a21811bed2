//! Internet Gateway creation and attachment.

use super::network::NetworkDescriptor;
use crate::scope::ProvisioningScope;
use crate::template::{ResourceDefinition, ResourceKind, Value};
use tracing::debug;

/// Appended to the gateway's logical id to name its attachment.
pub const ATTACHMENT_SUFFIX: &str = "attachment";

/// Attribute carrying the physical id of an `AWS::EC2::InternetGateway`.
pub const INTERNET_GATEWAY_ID_ATTRIBUTE: &str = "InternetGatewayId";

/// Creates an Internet Gateway and attaches it to a network.
#[derive(Debug, Clone)]
pub struct GatewayAttacher {
    network: NetworkDescriptor,
}

impl GatewayAttacher {
    pub fn new(network: &NetworkDescriptor) -> Self {
        Self {
            network: network.clone(),
        }
    }

    /// Registers the gateway and its attachment, returning the gateway's
    /// physical id token.
    ///
    /// The attachment is named `<gateway_logical_id>attachment`.
    pub fn attach(&self, scope: &mut ProvisioningScope, gateway_logical_id: &str) -> Value {
        let gateway_id = self.create_gateway(scope, gateway_logical_id);
        self.attach_to_network(scope, gateway_logical_id, &gateway_id);
        gateway_id
    }

    fn create_gateway(&self, scope: &mut ProvisioningScope, gateway_logical_id: &str) -> Value {
        scope.add_resource(ResourceDefinition::new(
            gateway_logical_id,
            ResourceKind::InternetGateway,
        ));
        Value::get_att(gateway_logical_id, INTERNET_GATEWAY_ID_ATTRIBUTE)
    }

    fn attach_to_network(
        &self,
        scope: &mut ProvisioningScope,
        gateway_logical_id: &str,
        gateway_id: &Value,
    ) {
        let attachment_id = attachment_logical_id(gateway_logical_id);
        debug!(gateway = gateway_logical_id, network = %self.network.id(), "Attaching gateway");
        scope.add_resource(
            ResourceDefinition::new(attachment_id, ResourceKind::VpcGatewayAttachment)
                .property("VpcId", self.network.id().clone())
                .property("InternetGatewayId", gateway_id.clone()),
        );
    }
}

/// Logical id of the attachment created for `gateway_logical_id`.
pub fn attachment_logical_id(gateway_logical_id: &str) -> String {
    format!("{}{}", gateway_logical_id, ATTACHMENT_SUFFIX)
}
