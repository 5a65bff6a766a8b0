//! Generated by `cargo xtask gen-builtin-scopes`; do not edit by hand.

/// Whether each built-in kind is namespaced, keyed by `{apiVersion}/{Kind}`.
pub(super) static BUILTIN_SCOPES: phf::Map<&'static str, bool> = phf::phf_map! {
	"admissionregistration.k8s.io/v1/MutatingWebhookConfiguration" => false,
	"admissionregistration.k8s.io/v1/ValidatingAdmissionPolicy" => false,
	"admissionregistration.k8s.io/v1/ValidatingAdmissionPolicyBinding" => false,
	"admissionregistration.k8s.io/v1/ValidatingWebhookConfiguration" => false,
	"admissionregistration.k8s.io/v1alpha1/MutatingAdmissionPolicy" => false,
	"admissionregistration.k8s.io/v1alpha1/MutatingAdmissionPolicyBinding" => false,
	"admissionregistration.k8s.io/v1alpha1/ValidatingAdmissionPolicy" => false,
	"admissionregistration.k8s.io/v1alpha1/ValidatingAdmissionPolicyBinding" => false,
	"admissionregistration.k8s.io/v1beta1/MutatingWebhookConfiguration" => false,
	"admissionregistration.k8s.io/v1beta1/ValidatingAdmissionPolicy" => false,
	"admissionregistration.k8s.io/v1beta1/ValidatingAdmissionPolicyBinding" => false,
	"admissionregistration.k8s.io/v1beta1/ValidatingWebhookConfiguration" => false,
	"apiextensions.k8s.io/v1/CustomResourceDefinition" => false,
	"apiextensions.k8s.io/v1beta1/CustomResourceDefinition" => false,
	"apiregistration.k8s.io/v1/APIService" => false,
	"apiregistration.k8s.io/v1beta1/APIService" => false,
	"apps/v1/ControllerRevision" => true,
	"apps/v1/DaemonSet" => true,
	"apps/v1/Deployment" => true,
	"apps/v1/ReplicaSet" => true,
	"apps/v1/StatefulSet" => true,
	"apps/v1beta1/ControllerRevision" => true,
	"apps/v1beta1/Deployment" => true,
	"apps/v1beta1/StatefulSet" => true,
	"apps/v1beta2/ControllerRevision" => true,
	"apps/v1beta2/DaemonSet" => true,
	"apps/v1beta2/Deployment" => true,
	"apps/v1beta2/ReplicaSet" => true,
	"apps/v1beta2/StatefulSet" => true,
	"authentication.k8s.io/v1/SelfSubjectReview" => false,
	"authentication.k8s.io/v1/TokenReview" => false,
	"authentication.k8s.io/v1alpha1/SelfSubjectReview" => false,
	"authentication.k8s.io/v1beta1/SelfSubjectReview" => false,
	"authentication.k8s.io/v1beta1/TokenReview" => false,
	"authorization.k8s.io/v1/LocalSubjectAccessReview" => true,
	"authorization.k8s.io/v1/SelfSubjectAccessReview" => false,
	"authorization.k8s.io/v1/SelfSubjectRulesReview" => false,
	"authorization.k8s.io/v1/SubjectAccessReview" => false,
	"authorization.k8s.io/v1beta1/LocalSubjectAccessReview" => true,
	"authorization.k8s.io/v1beta1/SelfSubjectAccessReview" => false,
	"authorization.k8s.io/v1beta1/SelfSubjectRulesReview" => false,
	"authorization.k8s.io/v1beta1/SubjectAccessReview" => false,
	"autoscaling/v1/HorizontalPodAutoscaler" => true,
	"autoscaling/v2/HorizontalPodAutoscaler" => true,
	"autoscaling/v2beta1/HorizontalPodAutoscaler" => true,
	"autoscaling/v2beta2/HorizontalPodAutoscaler" => true,
	"batch/v1/CronJob" => true,
	"batch/v1/Job" => true,
	"batch/v1beta1/CronJob" => true,
	"certificates.k8s.io/v1/CertificateSigningRequest" => false,
	"certificates.k8s.io/v1alpha1/ClusterTrustBundle" => false,
	"certificates.k8s.io/v1beta1/CertificateSigningRequest" => false,
	"coordination.k8s.io/v1/Lease" => true,
	"coordination.k8s.io/v1alpha1/LeaseCandidate" => true,
	"coordination.k8s.io/v1beta1/Lease" => true,
	"discovery.k8s.io/v1/EndpointSlice" => true,
	"discovery.k8s.io/v1beta1/EndpointSlice" => true,
	"events.k8s.io/v1/Event" => true,
	"events.k8s.io/v1beta1/Event" => true,
	"extensions/v1beta1/DaemonSet" => true,
	"extensions/v1beta1/Deployment" => true,
	"extensions/v1beta1/Ingress" => true,
	"extensions/v1beta1/NetworkPolicy" => true,
	"extensions/v1beta1/PodSecurityPolicy" => false,
	"extensions/v1beta1/ReplicaSet" => true,
	"flowcontrol.apiserver.k8s.io/v1/FlowSchema" => false,
	"flowcontrol.apiserver.k8s.io/v1/PriorityLevelConfiguration" => false,
	"flowcontrol.apiserver.k8s.io/v1beta1/FlowSchema" => false,
	"flowcontrol.apiserver.k8s.io/v1beta1/PriorityLevelConfiguration" => false,
	"flowcontrol.apiserver.k8s.io/v1beta2/FlowSchema" => false,
	"flowcontrol.apiserver.k8s.io/v1beta2/PriorityLevelConfiguration" => false,
	"flowcontrol.apiserver.k8s.io/v1beta3/FlowSchema" => false,
	"flowcontrol.apiserver.k8s.io/v1beta3/PriorityLevelConfiguration" => false,
	"imagepolicy.k8s.io/v1alpha1/ImageReview" => false,
	"internal.apiserver.k8s.io/v1alpha1/StorageVersion" => false,
	"networking.k8s.io/v1/Ingress" => true,
	"networking.k8s.io/v1/IngressClass" => false,
	"networking.k8s.io/v1/NetworkPolicy" => true,
	"networking.k8s.io/v1alpha1/IPAddress" => false,
	"networking.k8s.io/v1alpha1/ServiceCIDR" => false,
	"networking.k8s.io/v1beta1/IPAddress" => false,
	"networking.k8s.io/v1beta1/Ingress" => true,
	"networking.k8s.io/v1beta1/IngressClass" => false,
	"networking.k8s.io/v1beta1/ServiceCIDR" => false,
	"node.k8s.io/v1/RuntimeClass" => false,
	"node.k8s.io/v1alpha1/RuntimeClass" => false,
	"node.k8s.io/v1beta1/RuntimeClass" => false,
	"policy/v1/Eviction" => true,
	"policy/v1/PodDisruptionBudget" => true,
	"policy/v1beta1/Eviction" => true,
	"policy/v1beta1/PodDisruptionBudget" => true,
	"policy/v1beta1/PodSecurityPolicy" => false,
	"rbac.authorization.k8s.io/v1/ClusterRole" => false,
	"rbac.authorization.k8s.io/v1/ClusterRoleBinding" => false,
	"rbac.authorization.k8s.io/v1/Role" => true,
	"rbac.authorization.k8s.io/v1/RoleBinding" => true,
	"rbac.authorization.k8s.io/v1alpha1/ClusterRole" => false,
	"rbac.authorization.k8s.io/v1alpha1/ClusterRoleBinding" => false,
	"rbac.authorization.k8s.io/v1alpha1/Role" => true,
	"rbac.authorization.k8s.io/v1alpha1/RoleBinding" => true,
	"rbac.authorization.k8s.io/v1beta1/ClusterRole" => false,
	"rbac.authorization.k8s.io/v1beta1/ClusterRoleBinding" => false,
	"rbac.authorization.k8s.io/v1beta1/Role" => true,
	"rbac.authorization.k8s.io/v1beta1/RoleBinding" => true,
	"resource.k8s.io/v1alpha3/DeviceClass" => false,
	"resource.k8s.io/v1alpha3/PodSchedulingContext" => true,
	"resource.k8s.io/v1alpha3/ResourceClaim" => true,
	"resource.k8s.io/v1alpha3/ResourceClaimTemplate" => true,
	"resource.k8s.io/v1alpha3/ResourceSlice" => false,
	"scheduling.k8s.io/v1/PriorityClass" => false,
	"scheduling.k8s.io/v1alpha1/PriorityClass" => false,
	"scheduling.k8s.io/v1beta1/PriorityClass" => false,
	"storage.k8s.io/v1/CSIDriver" => false,
	"storage.k8s.io/v1/CSINode" => false,
	"storage.k8s.io/v1/CSIStorageCapacity" => true,
	"storage.k8s.io/v1/StorageClass" => false,
	"storage.k8s.io/v1/VolumeAttachment" => false,
	"storage.k8s.io/v1alpha1/CSIStorageCapacity" => true,
	"storage.k8s.io/v1alpha1/VolumeAttachment" => false,
	"storage.k8s.io/v1alpha1/VolumeAttributesClass" => false,
	"storage.k8s.io/v1beta1/CSIDriver" => false,
	"storage.k8s.io/v1beta1/CSINode" => false,
	"storage.k8s.io/v1beta1/CSIStorageCapacity" => true,
	"storage.k8s.io/v1beta1/StorageClass" => false,
	"storage.k8s.io/v1beta1/VolumeAttachment" => false,
	"storage.k8s.io/v1beta1/VolumeAttributesClass" => false,
	"storagemigration.k8s.io/v1alpha1/StorageVersionMigration" => false,
	"v1/Binding" => true,
	"v1/ComponentStatus" => false,
	"v1/ConfigMap" => true,
	"v1/Endpoints" => true,
	"v1/Event" => true,
	"v1/LimitRange" => true,
	"v1/Namespace" => false,
	"v1/Node" => false,
	"v1/PersistentVolume" => false,
	"v1/PersistentVolumeClaim" => true,
	"v1/Pod" => true,
	"v1/PodTemplate" => true,
	"v1/ReplicationController" => true,
	"v1/ResourceQuota" => true,
	"v1/Secret" => true,
	"v1/Service" => true,
	"v1/ServiceAccount" => true,
};
